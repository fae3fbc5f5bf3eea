//! ALFA PassGen - Cryptographic Core
//!
//! Deterministic keyed derivation, HMAC-SHA1 per the original scheme.

pub mod hmac_derive;

pub use hmac_derive::*;
