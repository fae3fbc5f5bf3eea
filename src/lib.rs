//! # ALFA PassGen
//!
//! Deterministic password generator - ALFA_KEYVAULT companion tool.
//!
//! Derives a printable password from a site parameter and a master secret
//! using HMAC-SHA1, Base64-encoded and truncated to the requested length.
//! The same inputs always produce the same password, so nothing ever has
//! to be stored.
//!
//! ## Security Model
//!
//! - Keyed derivation: `HMAC-SHA1(master secret, parameter)`
//! - Output is a Base64 prefix - printable everywhere
//! - No persistence, no RNG, no salt: fully deterministic
//! - Master secret wrapped in `SecretString`, zeroized after use
//! - SHA-1 retained for compatibility with previously generated passwords

pub mod crypto;
pub mod error;
pub mod policy;

pub use crypto::{derive_password, DIGEST_LEN, ENCODED_LEN};
pub use error::{PassGenError, PassGenResult};
pub use policy::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

/// ALFA PassGen version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
