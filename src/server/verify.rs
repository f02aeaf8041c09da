//! Ed25519 request signature checks.
//!
//! Each configured public key is one verification strategy; strategies are
//! tried in order and the first success accepts the request.
use serenity::interactions_endpoint::Verifier;

use crate::error::ConfigError;

pub trait SignatureCheck: Send + Sync {
    fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> bool;
}

pub struct Ed25519Keys {
    verifiers: Vec<Verifier>,
}

impl Ed25519Keys {
    /// Parses hex-encoded 32-byte public keys. Any malformed key is a configuration error.
    pub fn from_hex_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self, ConfigError> {
        let verifiers = keys
            .iter()
            .map(|k| parse_key(k.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if verifiers.is_empty() {
            return Err(ConfigError::Missing("DISCORD_PUBLIC_KEY"));
        }
        Ok(Self { verifiers })
    }
}

fn parse_key(hex_key: &str) -> Result<Verifier, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "DISCORD_PUBLIC_KEY",
        reason,
    };
    let bytes: [u8; 32] = hex::decode(hex_key.trim())
        .map_err(|e| invalid(e.to_string()))?
        .try_into()
        .map_err(|b: Vec<u8>| invalid(format!("expected 32 bytes, got {}", b.len())))?;
    Verifier::try_new(bytes).map_err(|_| invalid("not a valid Ed25519 point".to_string()))
}

impl SignatureCheck for Ed25519Keys {
    fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> bool {
        self.verifiers
            .iter()
            .any(|v| v.verify(signature, timestamp, body).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_keys() {
        assert!(Ed25519Keys::from_hex_keys(&["zz"]).is_err());
        assert!(Ed25519Keys::from_hex_keys(&["abcd"]).is_err());
        assert!(Ed25519Keys::from_hex_keys::<&str>(&[]).is_err());
    }

    #[test]
    fn garbage_signature_fails_closed() {
        // RFC 8032 test vector 1 public key.
        let keys = Ed25519Keys::from_hex_keys(&[
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        ])
        .unwrap();
        assert!(!keys.verify("00", "1700000000", b"{}"));
        assert!(!keys.verify(&"ab".repeat(64), "1700000000", b"{}"));
    }
}
