//! Classic algorithms: the two quadratic comparison sorts and the factorial
//! routines.
//!
//! This module implements the algorithm layer of the crate:
//! - [`bubble_sort`]: repeated adjacent-pair comparison with swaps.
//! - [`selection_sort`]: repeated minimum selection into the sorted prefix.
//! - [`factorial`] and [`double_factorial`]: iterative products.
//!
//! The sorts are the main entry points. They operate on any mutable slice;
//! [`StepVec`](crate::StepVec) sorts its live prefix by delegating here.

/// Sorts `data` ascending by repeated adjacent-pair comparison and swap.
///
/// Classic bubble sort with a shrinking pass: each outer pass bubbles the
/// largest remaining element to the end of the unsorted prefix, so pass `k`
/// only scans `k` pairs. There is no early exit on a swap-free pass; the
/// cost is O(N²) comparisons for every input, sorted ones included.
///
/// Equal elements are never swapped (the comparison is strict), so the sort
/// is stable in practice even though stability is not part of the contract.
///
/// # Examples
///
/// ```rust
/// use stepvec::bubble_sort;
///
/// let mut data = [5, 3, 1, 4];
/// bubble_sort(&mut data);
///
/// assert_eq!(data, [1, 3, 4, 5]);
/// ```
pub fn bubble_sort<T: PartialOrd>(data: &mut [T]) {
    for k in (1..data.len()).rev() {
        // Compare adjacent elements across the unsorted prefix [0, k].
        for i in 0..k {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
            }
        }
    }
}

/// Sorts `data` ascending by repeatedly selecting the minimum of the
/// unsorted suffix.
///
/// For each position `k`, scans `[k + 1, len)` for the index of the smallest
/// element and swaps it into `k` when it is strictly smaller than the
/// element already there. O(N²) comparisons for every input, at most
/// `N - 1` swaps.
///
/// # Examples
///
/// ```rust
/// use stepvec::selection_sort;
///
/// let mut data = [5, 3, 1, 4];
/// selection_sort(&mut data);
///
/// assert_eq!(data, [1, 3, 4, 5]);
/// ```
pub fn selection_sort<T: PartialOrd>(data: &mut [T]) {
    let len = data.len();
    for k in 0..len.saturating_sub(1) {
        let mut min = k;
        for i in (k + 1)..len {
            if data[i] < data[min] {
                min = i;
            }
        }
        // Swap only when the selected minimum actually beats position k.
        if data[k] > data[min] {
            data.swap(k, min);
        }
    }
}

/// `n!`, computed iteratively.
///
/// `factorial(0)` is 1. The result is exact in a `u64` up to `20!`.
///
/// # Panics
///
/// Panics if `n` is negative, or if the product overflows a `u64`
/// (`n > 20`).
///
/// # Examples
///
/// ```rust
/// use stepvec::factorial;
///
/// assert_eq!(factorial(5), 120);
/// ```
pub fn factorial(n: i32) -> u64 {
    assert!(n >= 0, "factorial of a negative number ({n})");

    let mut product: u64 = 1;
    for k in 2..=n as u64 {
        product = match product.checked_mul(k) {
            Some(p) => p,
            None => panic!("factorial({n}) overflows u64"),
        };
    }
    product
}

/// `n!!`, the double factorial: the product of every second value counting
/// down from `n` (for example `7!! = 7 × 5 × 3 × 1`).
///
/// `double_factorial(0)` and `double_factorial(1)` are 1. The result is
/// exact in a `u64` up to `33!!`.
///
/// # Panics
///
/// Panics if `n` is negative, or if the product overflows a `u64`
/// (`n > 33`).
///
/// # Examples
///
/// ```rust
/// use stepvec::double_factorial;
///
/// assert_eq!(double_factorial(7), 105);
/// ```
pub fn double_factorial(n: i32) -> u64 {
    assert!(n >= 0, "double factorial of a negative number ({n})");

    let mut product: u64 = 1;
    let mut k = n as u64;
    while k > 1 {
        product = match product.checked_mul(k) {
            Some(p) => p,
            None => panic!("double_factorial({n}) overflows u64"),
        };
        k -= 2;
    }
    product
}
