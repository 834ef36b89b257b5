//! Command-line front end for the Caesar and Vernam ciphers.
//!
//! Reads a file, ciphers or deciphers it, and writes the result to an
//! output file. When deciphering without a key, the key is recovered from
//! the ciphertext alone and announced on stdout.

use clap::{Parser, ValueEnum};
use std::fs;
use std::process;

use cipher_cracker::{caesar, vernam, CipherError};

/// Command-line arguments for the cipher tool.
#[derive(Parser, Debug)]
struct Cli {
    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Cipher to use (caesar or vernam)
    #[arg(short, long, help = "Cipher to use (caesar/vernam)")]
    cipher: CipherKind,

    /// Path to the input file
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key for the cipher: an integer for Caesar, a string for Vernam.
    /// Omit it when decrypting to recover the key from the ciphertext.
    #[arg(short, long, help = "Key for the cipher (omit on decrypt to crack it)")]
    key: Option<String>,

    /// Path to the output file
    #[arg(short, long, help = "Path to the output file")]
    output: String,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Enum representing the cipher to apply.
#[derive(Clone, Debug, ValueEnum)]
enum CipherKind {
    /// Caesar shift cipher (integer key)
    Caesar,
    /// Vernam running-key XOR cipher (string key)
    Vernam,
}

fn main() {
    let cli: Cli = Cli::parse();

    let result = match cli.mode {
        OperationMode::Encrypt => encrypt(&cli),
        OperationMode::Decrypt => decrypt(&cli),
    };

    if let Err(message) = result {
        eprintln!("{}", message);
        process::exit(1);
    }
}

/// Ciphers the input file with the requested cipher and writes the result.
///
/// The input is normalized first (lowercased, non-letters stripped): the
/// key-recovery statistics on the decrypt side only work on normalized
/// text.
fn encrypt(cli: &Cli) -> Result<(), String> {
    let key = cli
        .key
        .as_deref()
        .ok_or("A key is required for encryption")?;

    let raw = read_input(&cli.file)?;
    let text = sanitize_to_alpha(&raw);

    match cli.cipher {
        CipherKind::Caesar => {
            let shift = parse_caesar_key(key)?;
            println!("Encrypting with Caesar, key: {}", shift);

            let ciphered = caesar::encrypt(&text, shift);
            write_output(&cli.output, ciphered.as_bytes())?;
        }
        CipherKind::Vernam => {
            println!("Encrypting with Vernam, key: {}", key);

            let ciphered =
                vernam::encrypt(text.as_bytes(), key.as_bytes()).map_err(|e| e.to_string())?;
            write_output(&cli.output, &ciphered)?;
        }
    }

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}

/// Deciphers the input file, cracking the key first when none was given,
/// and writes the result.
fn decrypt(cli: &Cli) -> Result<(), String> {
    match cli.cipher {
        CipherKind::Caesar => {
            let ciphered = read_input(&cli.file)?;

            let plain = match cli.key.as_deref() {
                Some(key) => {
                    let shift = parse_caesar_key(key)?;
                    println!("Decrypting with Caesar, key: {}", shift);
                    caesar::decrypt(&ciphered, shift)
                }
                None => {
                    println!("Decrypting with Caesar, recovering the key");
                    let cracked = caesar::crack(&ciphered);
                    println!("Detected cipher key: {}", cracked.key);
                    cracked.plaintext
                }
            };

            write_output(&cli.output, plain.as_bytes())?;
        }
        CipherKind::Vernam => {
            let ciphered = fs::read(&cli.file)
                .map_err(|e| format!("Couldn't access file '{}': {}", cli.file, e))?;

            let plain = match cli.key.as_deref() {
                Some(key) => {
                    println!("Decrypting with Vernam, key: {}", key);
                    vernam::decrypt(&ciphered, key.as_bytes()).map_err(|e| e.to_string())?
                }
                None => {
                    println!("Decrypting with Vernam, recovering the key");
                    let cracked = vernam::crack(&ciphered).map_err(|e| match e {
                        CipherError::KeyLengthUndeterminable => "Undecipherable.".to_string(),
                        other => other.to_string(),
                    })?;
                    println!("Detected key length: {}", cracked.key.len());
                    println!("Recovered key: {}", format_key(&cracked.key));
                    cracked.plaintext
                }
            };

            write_output(&cli.output, &plain)?;
        }
    }

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}

/// Normalizes text for ciphering by keeping only ASCII letters and
/// lowercasing them.
fn sanitize_to_alpha(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parses a Caesar key, which must be an integer.
fn parse_caesar_key(key: &str) -> Result<i32, String> {
    key.trim()
        .parse()
        .map_err(|_| "Caesar key must be a numeral!".to_string())
}

/// Formats a recovered key for display: shown verbatim when every byte is
/// printable, hex-encoded otherwise.
fn format_key(key: &[u8]) -> String {
    if key.iter().all(|byte| byte.is_ascii_graphic()) {
        String::from_utf8_lossy(key).into_owned()
    } else {
        format!("0x{}", hex::encode(key))
    }
}

/// Reads the input file as text.
fn read_input(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Couldn't access file '{}': {}", path, e))
}

/// Writes the result to the output file.
fn write_output(path: &str, data: &[u8]) -> Result<(), String> {
    fs::write(path, data).map_err(|e| format!("Couldn't access file '{}': {}", path, e))
}
