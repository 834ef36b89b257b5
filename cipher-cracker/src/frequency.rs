//! Frequency statistics against standard English letter frequencies.
//!
//! Both key-recovery attacks in this crate reduce to the same question:
//! does a candidate deciphering look like English? The routines here answer
//! it with a chi-square test against relative English letter frequencies
//! and with the index of coincidence.

/// English letter frequencies for frequency analysis (a-z)
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// Index of coincidence of standard English text.
pub const ENGLISH_IC: f64 = 0.065;

/// Counts the occurrences of each byte value in the given text.
///
/// Returns an array of 256 counts indexed by byte value. An empty input
/// yields all zeros.
pub fn count_bytes(text: &[u8]) -> [u32; 256] {
    let mut counts = [0u32; 256];

    for &byte in text {
        counts[byte as usize] += 1;
    }

    counts
}

/// Performs a chi-square test between the given text and the standard
/// English letter frequencies.
///
/// The lower the result, the closer the text's letter distribution sits to
/// English. `None` is returned as soon as any byte outside `a-z` is seen:
/// either the text was never normalized, or a candidate key deciphered it
/// outside the alphabet. The attacks rely on that signal to reject wrong
/// keys, so it is a dedicated variant rather than a large numeric score it
/// could be confused with.
///
/// # Arguments
///
/// * `text` - The text to test.
///
/// # Returns
///
/// `Some(chi_square)` for text made entirely of lowercase letters, `None`
/// otherwise. Empty input observes nothing and yields `Some(0.0)`.
pub fn chi_square(text: &[u8]) -> Option<f64> {
    let counts = count_bytes(text);
    let length = text.len() as f64;
    let mut sum = 0.0;

    for (byte, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        if !(byte as u8).is_ascii_lowercase() {
            return None;
        }

        let observed = count as f64 / length;
        let expected = ENGLISH_FREQUENCIES[byte - b'a' as usize];
        sum += (observed - expected) * (observed - expected) / expected;
    }

    Some(sum)
}

/// Calculates the index of coincidence of the given text.
///
/// # Arguments
///
/// * `text` - The text to analyze.
///
/// # Returns
///
/// The probability that two bytes drawn at random from the text are equal,
/// `sum(c_i * (c_i - 1)) / (n * (n - 1))` over the per-byte counts. Texts
/// shorter than two bytes carry no coincidence information and yield `0.0`.
pub fn index_of_coincidence(text: &[u8]) -> f64 {
    let counts = count_bytes(text);
    let total = text.len();

    if total < 2 {
        return 0.0;
    }

    let numerator: f64 = counts
        .iter()
        .map(|&count| (count as u64 * (count as u64).saturating_sub(1)) as f64)
        .sum();
    let denominator = (total * (total - 1)) as f64;

    numerator / denominator
}
