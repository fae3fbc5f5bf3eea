//! ALFA PassGen - Input Policy
//!
//! UX-level rules applied before derivation: the selectable length range
//! and the non-empty checks. The derivation core itself accepts any input.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{PassGenError, PassGenResult};

/// Shortest selectable password length
pub const MIN_LENGTH: usize = 6;

/// Longest selectable password length
pub const MAX_LENGTH: usize = 32;

/// Default password length
pub const DEFAULT_LENGTH: usize = 10;

/// Check that a requested length is inside the selectable range
pub fn validate_length(length: usize) -> PassGenResult<()> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(PassGenError::LengthOutOfRange {
            requested: length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

/// Check that parameter and master secret are both non-empty
pub fn validate_inputs(parameter: &str, secret: &SecretString) -> PassGenResult<()> {
    if parameter.is_empty() {
        return Err(PassGenError::EmptyParameter);
    }
    if secret.expose_secret().is_empty() {
        return Err(PassGenError::EmptySecret);
    }
    Ok(())
}
