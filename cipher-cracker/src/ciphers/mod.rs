//! Classical cipher implementations

pub mod caesar;
pub mod vernam;
