//! ALFA PassGen - HMAC Password Derivation
//!
//! The whole scheme: HMAC-SHA1 over the parameter, keyed with the master
//! secret, Base64-encoded and cut to the requested length.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha1::Sha1;
use zeroize::Zeroize;

type HmacSha1 = Hmac<Sha1>;

/// HMAC-SHA1 digest length in bytes
pub const DIGEST_LEN: usize = 20;

/// Base64 length of a full digest, padding included
pub const ENCODED_LEN: usize = 28;

/// Derive a password from a site parameter and the master secret.
///
/// Deterministic: the same `(parameter, secret)` pair yields the same
/// output on every platform. The result is the first `length` characters
/// of `Base64(HMAC-SHA1(secret, parameter))`; asking for more than
/// [`ENCODED_LEN`] characters returns the full encoding.
pub fn derive_password(parameter: &str, secret: &SecretString, length: usize) -> String {
    let mut mac = HmacSha1::new_from_slice(secret.expose_secret().as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(parameter.as_bytes());

    let mut digest: [u8; DIGEST_LEN] = mac.finalize().into_bytes().into();
    let mut encoded = STANDARD.encode(&digest);
    digest.zeroize();

    // Base64 is pure ASCII, so the char index is the byte index
    encoded.truncate(length);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    #[test]
    fn test_known_vector() {
        let out = derive_password("example.com", &secret("correct horse"), 10);
        assert_eq!(out, "6olyhbDMb2");
    }

    #[test]
    fn test_full_encoding_keeps_padding() {
        let out = derive_password("example.com", &secret("correct horse"), ENCODED_LEN);
        assert_eq!(out, "6olyhbDMb2AjZhHjr8DvbfpdWVI=");
    }

    #[test]
    fn test_length_beyond_encoding_caps() {
        let full = derive_password("example.com", &secret("correct horse"), ENCODED_LEN);
        let over = derive_password("example.com", &secret("correct horse"), 32);
        assert_eq!(over, full);
        assert_eq!(over.len(), ENCODED_LEN);
    }

    #[test]
    fn test_deterministic() {
        let a = derive_password("wikipedia.org", &secret("hunter2"), 16);
        let b = derive_password("wikipedia.org", &secret("hunter2"), 16);
        assert_eq!(a, b);
        assert_eq!(a, "IaTC8QLMgPtFnhRo");
    }

    #[test]
    fn test_shorter_length_is_prefix() {
        let long = derive_password("wikipedia.org", &secret("hunter2"), 16);
        let short = derive_password("wikipedia.org", &secret("hunter2"), 6);
        assert_eq!(short, long[..6]);
    }

    #[test]
    fn test_empty_inputs_are_valid() {
        assert_eq!(derive_password("", &secret("secret"), 8), "Ja9hdKD8");
        assert_eq!(derive_password("x", &secret(""), 8), "YkTmZFGh");
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(derive_password("p", &secret("s"), 0), "");
    }

    #[test]
    fn test_avalanche() {
        let base = derive_password("example.com", &secret("correct horse"), 10);
        let param_flip = derive_password("example.con", &secret("correct horse"), 10);
        let secret_flip = derive_password("example.com", &secret("correct horsf"), 10);
        assert_ne!(param_flip, base);
        assert_ne!(secret_flip, base);
    }

    #[test]
    fn test_base64_alphabet_only() {
        let out = derive_password("żółć.example", &secret("pąss🔑"), ENCODED_LEN);
        assert!(out
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn test_unicode_inputs() {
        let out = derive_password("żółć.example", &secret("pąss🔑"), 12);
        assert_eq!(out, "e5X/3BKc5P5e");
    }

    #[test]
    fn test_rfc2202_vector() {
        // RFC 2202 test case 2: HMAC-SHA1("Jefe", "what do ya want for nothing?")
        let out = derive_password("what do ya want for nothing?", &secret("Jefe"), ENCODED_LEN);
        let expected = hex::decode("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79").unwrap();
        assert_eq!(STANDARD.decode(&out).unwrap(), expected);
    }
}
