use rand::Rng;
use stepvec::prelude::*;

#[test]
fn test_bubble_sort_basic() {
    let mut data = vec![5, 3, 1, 4];
    bubble_sort(&mut data);
    assert_eq!(data, vec![1, 3, 4, 5]);
}

#[test]
fn test_selection_sort_basic() {
    let mut data = vec![5, 3, 1, 4];
    selection_sort(&mut data);
    assert_eq!(data, vec![1, 3, 4, 5]);
}

#[test]
fn test_container_bubble_sort() {
    let mut v = StepVec::new(2, 2);
    for n in [9, -3, 7, 0, 7, 2] {
        v.push(n);
    }

    v.bubble_sort();

    for (i, expected) in [-3, 0, 2, 7, 7, 9].into_iter().enumerate() {
        assert_eq!(v[i], expected);
    }
}

#[test]
fn test_container_selection_sort() {
    let mut v = StepVec::new(2, 2);
    for n in [9, -3, 7, 0, 7, 2] {
        v.push(n);
    }

    v.selection_sort();

    for (i, expected) in [-3, 0, 2, 7, 7, 9].into_iter().enumerate() {
        assert_eq!(v[i], expected);
    }
}

#[test]
fn test_sort_edge_cases() {
    // 1. Empty
    let mut input: Vec<i32> = vec![];
    bubble_sort(&mut input);
    selection_sort(&mut input);
    assert!(input.is_empty());

    // 2. Single element
    let mut input = vec![42];
    bubble_sort(&mut input);
    assert_eq!(input, vec![42]);
    selection_sort(&mut input);
    assert_eq!(input, vec![42]);

    // 3. All same
    let mut input = vec![7; 50];
    let expected = input.clone();
    bubble_sort(&mut input);
    assert_eq!(input, expected);
    selection_sort(&mut input);
    assert_eq!(input, expected);

    // 4. Reversed
    let mut input: Vec<i32> = (0..50).rev().collect();
    let expected: Vec<i32> = (0..50).collect();
    bubble_sort(&mut input);
    assert_eq!(input, expected);

    let mut input: Vec<i32> = (0..50).rev().collect();
    selection_sort(&mut input);
    assert_eq!(input, expected);

    // 5. Already sorted
    let mut input: Vec<i32> = (0..50).collect();
    bubble_sort(&mut input);
    assert_eq!(input, expected);
    selection_sort(&mut input);
    assert_eq!(input, expected);
}

#[test]
fn test_sort_strings() {
    let mut data = vec![
        "banana".to_string(),
        "apple".to_string(),
        "date".to_string(),
        "cherry".to_string(),
    ];
    bubble_sort(&mut data);
    assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);

    let mut data = vec!["b".to_string(), "a".to_string(), "c".to_string()];
    selection_sort(&mut data);
    assert_eq!(data, vec!["a", "b", "c"]);
}

// Equality and ordering look at the rank only, never at the deal order.
#[derive(Debug, Clone)]
struct Card {
    rank: u8,
    deal: usize,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.rank.partial_cmp(&other.rank)
    }
}

#[test]
fn test_bubble_sort_is_stable() {
    let ranks = [3u8, 1, 3, 2, 1, 3, 2, 1];
    let mut cards: Vec<Card> = ranks
        .iter()
        .enumerate()
        .map(|(deal, &rank)| Card { rank, deal })
        .collect();

    bubble_sort(&mut cards);

    // Ranks ascend, and equal ranks keep their deal order.
    for pair in cards.windows(2) {
        assert!(pair[0].rank <= pair[1].rank);
        if pair[0].rank == pair[1].rank {
            assert!(pair[0].deal < pair[1].deal);
        }
    }
}

#[test]
fn test_fuzz_against_std_sort() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let count = rng.random_range(0..64);
        let input: Vec<i32> = (0..count).map(|_| rng.random_range(-1000..1000)).collect();

        let mut expected = input.clone();
        expected.sort();

        let mut bubbled = input.clone();
        bubble_sort(&mut bubbled);
        assert_eq!(bubbled, expected);

        let mut selected = input;
        selection_sort(&mut selected);
        assert_eq!(selected, expected);
    }
}

#[test]
fn test_fuzz_floats() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let count = rng.random_range(0..48);
        let input: Vec<f64> = (0..count)
            .map(|_| rng.random_range(-1000.0..1000.0))
            .collect();

        let mut expected = input.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut bubbled = input.clone();
        bubble_sort(&mut bubbled);
        assert_eq!(bubbled, expected);

        let mut selected = input;
        selection_sort(&mut selected);
        assert_eq!(selected, expected);
    }
}

#[test]
fn test_fuzz_byte_rows() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let count = rng.random_range(0..20);
        let mut input: Vec<Vec<u8>> = (0..count)
            .map(|_| {
                let len = rng.random_range(0..50);
                let mut row = vec![0u8; len];
                rng.fill(&mut row[..]);
                row
            })
            .collect();

        let mut expected = input.clone();
        expected.sort();

        bubble_sort(&mut input);
        assert_eq!(input, expected);
    }
}

#[test]
fn test_sorts_agree() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let count = rng.random_range(0..64);
        let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..50)).collect();

        let mut a = input.clone();
        bubble_sort(&mut a);
        let mut b = input;
        selection_sort(&mut b);
        assert_eq!(a, b);
    }
}
