//! Constructors and accessors for proto types.
//!
//! This module provides the hand-written helpers used throughout the
//! GossipWire crates to build and inspect wire messages without spelling
//! out raw enum discriminants at every call site.

use crate::v1::*;

// ============================================================================
// Public key helpers
// ============================================================================

impl PublicKeyV1 {
    /// Create an Ed25519 public key from raw bytes.
    pub fn ed25519(key_bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            key_type: KeyTypeV1::Ed25519 as i32,
            key_bytes: key_bytes.into(),
        }
    }

    /// Create an ECDSA P-256 public key from a SEC1 uncompressed point.
    pub fn ecdsa_p256(key_bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            key_type: KeyTypeV1::EcdsaP256 as i32,
            key_bytes: key_bytes.into(),
        }
    }

    /// Check if this is an Ed25519 key.
    pub fn is_ed25519(&self) -> bool {
        self.key_type == KeyTypeV1::Ed25519 as i32
    }

    /// Check if this is an ECDSA P-256 key.
    pub fn is_ecdsa_p256(&self) -> bool {
        self.key_type == KeyTypeV1::EcdsaP256 as i32
    }

    /// Get the key type as an enum.
    pub fn key_type_enum(&self) -> KeyTypeV1 {
        KeyTypeV1::try_from(self.key_type).unwrap_or(KeyTypeV1::Unspecified)
    }
}

// ============================================================================
// Message helpers
// ============================================================================

impl MessageV1 {
    /// Check if this message carries a signature.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Check if this message names its originator.
    pub fn has_origin(&self) -> bool {
        self.from.is_some()
    }
}
