use std::collections::BTreeSet;

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Returns only the lowercase vowels (`y` included) of `text`, in order.
pub fn vowels(text: &str) -> String {
    text.chars().filter(|ch| VOWELS.contains(ch)).collect()
}

pub fn vowel_count(text: &str) -> usize {
    vowels(text).chars().count()
}

pub fn is_even(n: usize) -> bool {
    n % 2 == 0
}

/// Ascending positive divisors of `n`, ending with `n` itself. Empty for zero.
pub fn factors(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let mut factors: Vec<usize> = (1..=n / 2).filter(|candidate| n % candidate == 0).collect();
    factors.push(n);
    factors
}

/// Number of divisors `a` and `b` have in common.
pub fn shared_factor_count(a: usize, b: usize) -> usize {
    let left: BTreeSet<usize> = factors(a).into_iter().collect();
    factors(b)
        .into_iter()
        .filter(|factor| left.contains(factor))
        .count()
}

/// Scores how well `driver` suits `shipment`; higher is better, never negative.
///
/// Even-length shipments favour vowel-heavy names (1.5 per vowel), odd-length
/// ones favour consonants. The score is halved when the two lengths share a
/// divisor other than 1.
pub fn suitability(shipment: &str, driver: &str) -> f32 {
    let shipment_len = shipment.chars().count();
    let driver_len = driver.chars().count();
    let vowel_count = vowel_count(driver);

    let mut score = if is_even(shipment_len) {
        vowel_count as f32 * 1.5
    } else {
        (driver_len - vowel_count) as f32
    };

    if shared_factor_count(driver_len, shipment_len) > 1 {
        score *= 0.5;
    }

    score
}
