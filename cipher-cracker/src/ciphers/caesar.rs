//! Caesar shift cipher with chi-square key recovery.

use crate::frequency;

/// Outcome of cracking a Caesar-ciphered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackedCaesar {
    /// The recovered plain text.
    pub plaintext: String,
    /// The recovered key in `0..26`; passing it to [`decrypt`] reproduces
    /// [`CrackedCaesar::plaintext`].
    pub key: u8,
}

/// Ciphers a normalized lowercase text with the Caesar cipher.
///
/// Each letter is shifted `key` positions along the alphabet, wrapping
/// around at both ends; with a shift of 3, `a` becomes `d` and `z` becomes
/// `c`. The shift is the key of the cipher and any integer is accepted: it
/// is reduced modulo 26 first.
///
/// The text is assumed to be normalized to lowercase letters beforehand;
/// anything else is outside the contract of this cipher.
///
/// # Arguments
///
/// * `text` - The text to cipher.
/// * `key` - The shift used for ciphering.
///
/// # Returns
///
/// The ciphered string.
pub fn encrypt(text: &str, key: i32) -> String {
    // The `%` operator truncates toward zero and would leave negative
    // alphabet indices for negative shifts ('b' shifted by -3 must wrap to
    // 'y'); `rem_euclid` keeps the index in `0..26`.
    let key = key.rem_euclid(26);

    text.bytes()
        .map(|byte| {
            let index = byte as i32 - 'a' as i32;
            (b'a' + (index + key).rem_euclid(26) as u8) as char
        })
        .collect()
}

/// Deciphers a Caesar-ciphered text with a known key.
///
/// Deciphering is just shifting every letter back by the key.
///
/// # Arguments
///
/// * `text` - The text to decipher.
/// * `key` - The shift used when ciphering.
///
/// # Returns
///
/// The plain text.
pub fn decrypt(text: &str, key: i32) -> String {
    encrypt(text, -key.rem_euclid(26))
}

/// Deciphers a Caesar-ciphered text without knowing the key.
///
/// Every one of the 26 possible shifts is tried and each candidate
/// deciphering is scored with a chi-square test against standard English
/// letter frequencies; the shift with the smallest score wins. On equal
/// scores the smallest shift wins, so the scan order is observable and must
/// stay ascending.
///
/// Frequency analysis is only as reliable as the sample is long: as the
/// input grows, its letter frequencies approach the standard and the right
/// shift separates clearly. Short or unusual input may crack to a wrong
/// key; that is a limitation of the method, not a failure, so a result is
/// always produced.
///
/// # Arguments
///
/// * `ciphertext` - The ciphered text.
///
/// # Returns
///
/// The deciphered text together with the detected key.
pub fn crack(ciphertext: &str) -> CrackedCaesar {
    let mut best_key = 0u8;
    let mut best_chi_squared = f64::INFINITY;

    for key in 0..26u8 {
        let candidate = decrypt(ciphertext, key as i32);

        // Candidates that stray outside a-z score None and never win.
        if let Some(chi_squared) = frequency::chi_square(candidate.as_bytes()) {
            if chi_squared < best_chi_squared {
                best_chi_squared = chi_squared;
                best_key = key;
            }
        }
    }

    CrackedCaesar {
        plaintext: decrypt(ciphertext, best_key as i32),
        key: best_key,
    }
}
