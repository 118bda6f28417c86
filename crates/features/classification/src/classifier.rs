//! Pure number-theoretic predicates and the classification aggregate.
//!
//! Every function here is total over `i64`: no panics, no I/O, no shared
//! state. Negative input is accepted; predicates that are only meaningful
//! for magnitudes (Armstrong, digit sum) operate on the absolute value.

use numclass_domain::constants::{ARMSTRONG, EVEN, ODD};

/// The classification of a single integer, fun fact not yet attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    /// Exactly one of `even`/`odd`, plus `armstrong` when applicable.
    /// Sorted alphabetically for a deterministic response shape.
    pub properties: Vec<&'static str>,
    pub digit_sum: u32,
}

/// Returns true iff `n` is prime.
///
/// Even numbers above 2 are rejected outright; the remainder is odd trial
/// division up to ⌊√n⌋.
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let limit = n.isqrt();
    let mut i = 3;
    while i <= limit {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Returns true iff `n` equals the sum of its proper divisors.
///
/// Divisors are collected pairwise while scanning `2..=⌊√n⌋`; the sum is
/// accumulated in `i128` so it cannot wrap for any `i64` input.
#[must_use]
pub fn is_perfect(n: i64) -> bool {
    if n < 2 {
        // 1 has no proper divisors besides the empty sum.
        return false;
    }

    let mut sum: i128 = 1;
    let limit = n.isqrt();
    for i in 2..=limit {
        if n % i == 0 {
            sum += i128::from(i);
            let pair = n / i;
            if pair != i {
                sum += i128::from(pair);
            }
        }
    }
    sum == i128::from(n)
}

/// Returns true iff `|n|` equals the sum of its digits each raised to the
/// power of the digit count.
///
/// The accumulation is checked: once the running sum exceeds `|n|` (or would
/// overflow `u64`) the number cannot be Armstrong.
#[must_use]
pub fn is_armstrong(n: i64) -> bool {
    let target = n.unsigned_abs();
    let digits = decimal_digits(target);

    let mut sum: u64 = 0;
    let mut rest = target;
    loop {
        let digit = rest % 10;
        match digit.checked_pow(digits).and_then(|p| sum.checked_add(p)) {
            Some(s) if s <= target => sum = s,
            _ => return false,
        }
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    sum == target
}

/// Sum of the decimal digits of `|n|`.
#[must_use]
pub fn digit_sum(n: i64) -> u32 {
    let mut rest = n.unsigned_abs();
    let mut sum = 0u32;
    loop {
        sum += u32::try_from(rest % 10).unwrap_or_default();
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    sum
}

/// Classifies `n`: primality, perfection, parity/Armstrong tags, digit sum.
#[must_use]
pub fn classify(n: i64) -> Classification {
    let mut properties = vec![if n % 2 == 0 { EVEN } else { ODD }];
    if is_armstrong(n) {
        properties.push(ARMSTRONG);
    }
    properties.sort_unstable();

    Classification {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties,
        digit_sum: digit_sum(n),
    }
}

/// Number of decimal digits of `n` (1 for zero).
fn decimal_digits(n: u64) -> u32 {
    if n == 0 { 1 } else { n.ilog10() + 1 }
}
