//! Error types for cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Cannot cipher with an empty key")]
    EmptyKey,

    #[error("Key length could not be determined")]
    KeyLengthUndeterminable,
}

pub type Result<T> = std::result::Result<T, CipherError>;
