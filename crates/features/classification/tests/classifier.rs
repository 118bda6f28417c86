use numclass_classification::classifier::{
    classify, digit_sum, is_armstrong, is_perfect, is_prime,
};

/// Reference predicate: divisor scan over the full range.
fn is_prime_naive(n: i64) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

#[test]
fn primality_matches_naive_scan_up_to_100() {
    for n in 0..=100 {
        assert_eq!(is_prime(n), is_prime_naive(n), "disagreement at {n}");
    }
}

#[test]
fn primality_edge_cases() {
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(!is_prime(4));
    assert!(!is_prime(-7));
    assert!(is_prime(7919));
    assert!(!is_prime(7917));
}

#[test]
fn perfect_numbers() {
    assert!(is_perfect(6));
    assert!(is_perfect(28));
    assert!(is_perfect(496));
    assert!(is_perfect(8128));

    assert!(!is_perfect(0));
    assert!(!is_perfect(1));
    assert!(!is_perfect(12));
    assert!(!is_perfect(-6));
}

#[test]
fn armstrong_numbers() {
    assert!(is_armstrong(153));
    assert!(is_armstrong(9474));
    assert!(is_armstrong(370));
    assert!(is_armstrong(371));
    assert!(!is_armstrong(10));
    assert!(!is_armstrong(100));

    // Single digits are trivially Armstrong, and the check runs on |n|.
    assert!(is_armstrong(0));
    assert!(is_armstrong(5));
    assert!(is_armstrong(-153));
}

#[test]
fn digit_sums() {
    assert_eq!(digit_sum(-123), 6);
    assert_eq!(digit_sum(0), 0);
    assert_eq!(digit_sum(28), 10);
    assert_eq!(digit_sum(9_999_999), 63);
}

#[test]
fn classify_four_is_even_and_nothing_else() {
    let c = classify(4);
    assert!(!c.is_prime);
    assert!(!c.is_perfect);
    assert_eq!(c.properties, vec!["even"]);
    assert_eq!(c.digit_sum, 4);
}

#[test]
fn classify_153_is_an_odd_armstrong_number() {
    let c = classify(153);
    assert_eq!(c.properties, vec!["armstrong", "odd"]);
    assert!(!c.is_prime);
    assert!(!c.is_perfect);
    assert_eq!(c.digit_sum, 9);
}

#[test]
fn classify_28_is_perfect_and_even() {
    let c = classify(28);
    assert!(c.is_perfect);
    assert!(!c.is_prime);
    assert_eq!(c.properties, vec!["even"]);
    assert_eq!(c.digit_sum, 10);
}

#[test]
fn classify_handles_negatives_and_the_minimum() {
    // i64::MIN has no positive counterpart; nothing here may panic.
    let c = classify(i64::MIN);
    assert!(!c.is_prime);
    assert!(!c.is_perfect);
    assert_eq!(c.properties, vec!["even"]);

    let c = classify(-3);
    assert_eq!(c.properties, vec!["odd"]);
    assert!(!c.is_prime);
}
