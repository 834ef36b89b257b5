//! # Cipher Cracker Library
//!
//! This library implements two classical ciphers together with routines
//! that recover the key from ciphertext alone.
//!
//! ## Supported Ciphers
//!
//! - **Caesar** - Alphabet shift cipher; cracked by brute-forcing all 26
//!   shifts and keeping the candidate with the best chi-square fit to
//!   standard English letter frequencies
//! - **Vernam** - Repeating-key XOR cipher; cracked in two stages: key
//!   length detection via the index of coincidence, then an exhaustive
//!   per-column search for each key byte
//!
//! Both attacks assume text that was normalized to lowercase `a-z` before
//! ciphering, and both get more reliable the longer the text is. The
//! forward transforms are trivial; the point of this crate is the recovery
//! machinery, built on the statistics in [`frequency`].
//!
//! ## Usage
//!
//! ```rust
//! use cipher_cracker::{caesar, vernam};
//!
//! // Caesar: integer shift key
//! let ciphered = caesar::encrypt("attackatdawn", 7);
//! assert_eq!(caesar::decrypt(&ciphered, 7), "attackatdawn");
//!
//! // Vernam: byte-string key, must not be empty
//! let ciphered = vernam::encrypt(b"attackatdawn", b"key")?;
//! assert_eq!(vernam::decrypt(&ciphered, b"key")?, b"attackatdawn");
//! # Ok::<(), cipher_cracker::CipherError>(())
//! ```
//!
//! Cracking recovers key and plain text from the ciphertext alone:
//!
//! ```rust,no_run
//! use cipher_cracker::{caesar, vernam};
//!
//! let cracked = caesar::crack("wklvlvflskhuhg");
//! println!("key {}: {}", cracked.key, cracked.plaintext);
//!
//! // Fails with KeyLengthUndeterminable when the text is too short
//! // relative to the key
//! let cracked = vernam::crack(&[0x1f, 0x0a, 0x1e])?;
//! println!("recovered {} key bytes", cracked.key.len());
//! # Ok::<(), cipher_cracker::CipherError>(())
//! ```

// Public modules
pub mod ciphers;
pub mod error;
pub mod frequency;

// Re-exports for easy access
pub use ciphers::{caesar, vernam};
pub use error::{CipherError, Result};
