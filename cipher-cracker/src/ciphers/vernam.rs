//! Vernam running-key XOR cipher with automatic key recovery.
//!
//! The forward transform is a byte-wise XOR against a repeating key. The
//! recovery attack works in two stages: the key length is detected first by
//! probing candidate lengths with the index of coincidence, then each key
//! byte is recovered independently by exhausting the byte range against the
//! chi-square test.

use crate::error::{CipherError, Result};
use crate::frequency::{self, ENGLISH_IC};

/// Maximum deviation from the English index of coincidence accepted when
/// probing candidate key lengths.
const IC_TOLERANCE: f64 = 0.005;

/// Outcome of cracking a Vernam-ciphered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackedVernam {
    /// The recovered plain text.
    pub plaintext: Vec<u8>,
    /// The recovered key; its length is the detected key length.
    pub key: Vec<u8>,
}

/// Ciphers a text with the Vernam cipher.
///
/// Every byte of the text is XORed with the corresponding byte of the key;
/// a key shorter than the text repeats from its start, so byte `i` is paired
/// with `key[i % key.len()]`.
///
/// # Arguments
///
/// * `text` - The text to cipher.
/// * `key` - The key used for ciphering.
///
/// # Returns
///
/// The ciphered bytes, or [`CipherError::EmptyKey`] if the key is empty.
pub fn encrypt(text: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    Ok(text
        .iter()
        .zip(key.iter().cycle())
        .map(|(&byte, &k)| byte ^ k)
        .collect())
}

/// Deciphers a Vernam-ciphered text with a known key.
///
/// XOR is self-inverse, so deciphering is just ciphering again with the
/// same key.
pub fn decrypt(text: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    encrypt(text, key)
}

/// Deciphers a Vernam-ciphered text without knowing the key.
///
/// The attack assumes the text was normalized to lowercase letters before
/// ciphering and is considerably longer than the key. It proceeds in two
/// stages:
///
/// 1. `best_key_length` probes candidate key lengths with the index of
///    coincidence. If no candidate passes, the text cannot be deciphered
///    and [`CipherError::KeyLengthUndeterminable`] is returned, so callers
///    can tell this apart from a crack that merely recovered a wrong key.
/// 2. For the detected length `L`, the text is split into `L` columns of
///    bytes that were all ciphered with the same key byte, and
///    `best_key_part` recovers each column's byte independently.
///
/// The recovered bytes, concatenated in column order, form the key; the
/// text is then deciphered with it.
///
/// Stage 2 is the dominant cost: 256 chi-square evaluations per key byte,
/// each a pass over the column, so O(256 * L) evaluations per crack. The
/// search is kept exhaustive on purpose; the range is small and fixed.
///
/// # Arguments
///
/// * `ciphertext` - The ciphered text.
///
/// # Returns
///
/// The deciphered text together with the recovered key, or
/// [`CipherError::KeyLengthUndeterminable`] if stage 1 fails.
pub fn crack(ciphertext: &[u8]) -> Result<CrackedVernam> {
    let key_length =
        best_key_length(ciphertext).ok_or(CipherError::KeyLengthUndeterminable)?;

    let key: Vec<u8> = split_columns(ciphertext, key_length)
        .iter()
        .map(|column| best_key_part(column))
        .collect();

    let plaintext = decrypt(ciphertext, &key)?;

    Ok(CrackedVernam { plaintext, key })
}

/// Determines the most plausible key length for a Vernam-ciphered text.
///
/// For each candidate length, the bytes at positions `0, L, 2L, ...` form a
/// probe sequence that, if `L` is right, was ciphered with a single
/// repeated key byte. XOR with a fixed byte permutes values without merging
/// them, so such a probe keeps the index of coincidence of English text;
/// a wrong `L` mixes key bytes and flattens it.
///
/// Candidates are scanned ascending and the first length whose probe lands
/// within [`IC_TOLERANCE`] of [`ENGLISH_IC`] wins. Taking the first match
/// instead of a global best is deliberate: larger candidates build shorter
/// probes whose coincidence estimates wobble, and a smaller detected length
/// leaves more bytes per column for the frequency analysis that follows.
/// The trade-off is that a degenerate key such as `aaaaab` tends to detect
/// as length 1.
///
/// # Arguments
///
/// * `ciphertext` - The ciphered text.
///
/// # Returns
///
/// The first length passing the test, or `None` if no candidate does,
/// typically because the text is too short relative to the key.
fn best_key_length(ciphertext: &[u8]) -> Option<usize> {
    for length in 1..ciphertext.len() {
        let probe: Vec<u8> = ciphertext.iter().step_by(length).copied().collect();
        let ic = frequency::index_of_coincidence(&probe);

        if (ic - ENGLISH_IC).abs() < IC_TOLERANCE {
            return Some(length);
        }
    }

    None
}

/// Splits a text into `key_length` columns.
///
/// Column `i` collects the bytes at positions `i, i + key_length,
/// i + 2 * key_length, ...`, exactly the bytes ciphered with key byte `i`.
fn split_columns(text: &[u8], key_length: usize) -> Vec<Vec<u8>> {
    let mut columns = vec![Vec::new(); key_length];

    for (i, &byte) in text.iter().enumerate() {
        columns[i % key_length].push(byte);
    }

    columns
}

/// Recovers the key byte a single column was ciphered with.
///
/// Every possible key byte is tried in ascending order and the first one
/// under which the whole column deciphers to lowercase letters wins. With a
/// sufficiently long column only the true key byte passes, so the first
/// valid candidate is taken without comparing scores further; the scan
/// order is part of the observable behavior.
///
/// If no candidate keeps the column inside the alphabet the recovery has
/// failed for this column and `0` is returned; the deciphered text will be
/// wrong at this column's positions. Known weak spot on short or unusual
/// input.
fn best_key_part(column: &[u8]) -> u8 {
    for candidate in u8::MIN..=u8::MAX {
        let deciphered: Vec<u8> = column.iter().map(|&byte| byte ^ candidate).collect();

        if frequency::chi_square(&deciphered).is_some() {
            return candidate;
        }
    }

    0
}
