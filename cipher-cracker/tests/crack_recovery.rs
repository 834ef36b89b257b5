//! End-to-end key recovery tests over the public API.
//!
//! The crack routines are statistical: they need genuinely English text of
//! a few hundred characters to be reliable. These tests cipher a fixed
//! normalized sample with known keys and assert that both the key and the
//! full plain text come back exactly.

use cipher_cracker::{caesar, vernam, CipherError};

/// Normalized (lowercase, letters only) English sample, 613 characters.
const SAMPLE: &str = concat!(
    "itwasthebestoftimesitwastheworstoftimesitwastheageofwisdomitwast",
    "heageoffoolishnessitwastheepochofbeliefitwastheepochofincredulit",
    "yitwastheseasonoflightitwastheseasonofdarknessitwasthespringofho",
    "peitwasthewinterofdespairwehadeverythingbeforeuswehadnothingbefo",
    "reuswewereallgoingdirecttoheavenwewereallgoingdirecttheotherwayi",
    "nshorttheperiodwassofarlikethepresentperiodthatsomeofitsnoisiest",
    "authoritiesinsistedonitsbeingreceivedforgoodorforevilinthesuperl",
    "ativedegreeofcomparisononlytherewereakingwithalargejawandaqueenw",
    "ithaplainfaceonthethroneofenglandtherewereakingwithalargejawanda",
    "queenwithafairfaceonthethroneoffrance",
);

#[test]
fn caesar_crack_recovers_known_shift() {
    let ciphered = caesar::encrypt(SAMPLE, 7);
    assert_ne!(ciphered, SAMPLE);

    let cracked = caesar::crack(&ciphered);
    assert_eq!(cracked.key, 7, "wrong shift detected");
    assert_eq!(cracked.plaintext, SAMPLE);
}

#[test]
fn caesar_crack_of_plain_text_detects_zero_shift() {
    let cracked = caesar::crack(SAMPLE);
    assert_eq!(cracked.key, 0);
    assert_eq!(cracked.plaintext, SAMPLE);
}

#[test]
fn caesar_round_trip_over_sample() {
    for key in [1, 7, 13, 25] {
        let ciphered = caesar::encrypt(SAMPLE, key);
        assert_eq!(caesar::decrypt(&ciphered, key), SAMPLE);
    }
}

#[test]
fn vernam_crack_recovers_known_key() {
    let ciphered = vernam::encrypt(SAMPLE.as_bytes(), b"key").unwrap();

    let cracked = vernam::crack(&ciphered).unwrap();
    assert_eq!(cracked.key.len(), 3, "wrong key length detected");
    assert_eq!(cracked.key, b"key");
    assert_eq!(cracked.plaintext, SAMPLE.as_bytes());
}

#[test]
fn vernam_crack_degenerate_key_still_decodes() {
    // A single-byte key may be detected at a multiple of its true length;
    // the recovered key is then the byte repeated, and the plain text is
    // still exactly right.
    let ciphered = vernam::encrypt(SAMPLE.as_bytes(), b"k").unwrap();

    let cracked = vernam::crack(&ciphered).unwrap();
    assert!(cracked.key.iter().all(|&byte| byte == b'k'));
    assert_eq!(cracked.plaintext, SAMPLE.as_bytes());
}

#[test]
fn vernam_crack_short_text_is_undeterminable() {
    // Far too short for any coincidence estimate to stabilize; the crack
    // must refuse rather than hand back garbage.
    let ciphered = vernam::encrypt(b"shorttext", b"key").unwrap();
    assert_eq!(vernam::crack(&ciphered), Err(CipherError::KeyLengthUndeterminable));
}

#[test]
fn vernam_decrypts_frozen_ciphertext() {
    // Frozen snapshot: "attackatdawn" ciphered with "key". Any change in
    // output indicates a regression in the transform.
    let ciphered = hex::decode("0a110d0a06120a111d0a1217").unwrap();
    assert_eq!(
        vernam::decrypt(&ciphered, b"key").unwrap(),
        b"attackatdawn"
    );
    assert_eq!(vernam::encrypt(b"attackatdawn", b"key").unwrap(), ciphered);
}

#[test]
fn vernam_empty_key_never_passes_text_through() {
    assert_eq!(
        vernam::encrypt(SAMPLE.as_bytes(), b""),
        Err(CipherError::EmptyKey)
    );
    assert_eq!(
        vernam::decrypt(SAMPLE.as_bytes(), b""),
        Err(CipherError::EmptyKey)
    );
}
