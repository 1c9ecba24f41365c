use stepvec::{double_factorial, factorial};

fn main() {
    println!("The factorial of 5: {}", factorial(5));
    println!("The double factorial of 7: {}", double_factorial(7));
}
