//! Validation helpers for GossipWire protocol messages.
//!
//! This module provides validation methods for message fields including:
//! - Size validation for byte fields (identifiers, keys, signatures)
//! - Presence checks for fields every message must carry

use crate::v1::*;

/// Validation error types for protocol messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field has invalid size (expected, actual)
    InvalidSize { field: &'static str, expected: usize, actual: usize },
    /// Field size is out of allowed range
    SizeOutOfRange { field: &'static str, min: usize, max: usize, actual: usize },
    /// Required field is empty
    EmptyField { field: &'static str },
    /// Field contains invalid data
    InvalidData { field: &'static str, reason: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize { field, expected, actual } => {
                write!(f, "field '{}' has invalid size: expected {}, got {}", field, expected, actual)
            }
            Self::SizeOutOfRange { field, min, max, actual } => {
                write!(f, "field '{}' size {} is out of range [{}, {}]", field, actual, min, max)
            }
            Self::EmptyField { field } => {
                write!(f, "required field '{}' is empty", field)
            }
            Self::InvalidData { field, reason } => {
                write!(f, "field '{}' contains invalid data: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Constants for field sizes.
pub mod sizes {
    /// Size of seqno markers produced by this implementation.
    pub const SEQNO_SIZE: usize = 8;
    /// Size of Ed25519 public keys.
    pub const ED25519_PUB_SIZE: usize = 32;
    /// Size of Ed25519 signatures.
    pub const ED25519_SIG_SIZE: usize = 64;
    /// Size of ECDSA P-256 public keys (SEC1 uncompressed point).
    pub const P256_PUB_SIZE: usize = 65;
    /// Size of SHA-256 digests.
    pub const SHA256_DIGEST_SIZE: usize = 32;
    /// Largest encoded public key an originator identifier carries inline.
    pub const MAX_INLINE_KEY_LEN: usize = 42;
    /// Upper bound for originator identifier bytes (two varints + inline key).
    pub const MAX_FROM_SIZE: usize = 2 + MAX_INLINE_KEY_LEN;
    /// Upper bound for signature bytes (DER-encoded ECDSA tops out at 72).
    pub const MAX_SIG_SIZE: usize = 72;
    /// Upper bound for embedded key fields (encoded PublicKeyV1).
    pub const MAX_KEY_SIZE: usize = 128;
}

/// Validate that a byte field has the expected exact size.
fn validate_exact_size(field: &'static str, data: &[u8], expected: usize) -> ValidationResult<()> {
    if data.len() != expected {
        return Err(ValidationError::InvalidSize {
            field,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Validate that a byte field's size falls within an inclusive range.
fn validate_size_range(field: &'static str, data: &[u8], min: usize, max: usize) -> ValidationResult<()> {
    if data.len() < min || data.len() > max {
        return Err(ValidationError::SizeOutOfRange {
            field,
            min,
            max,
            actual: data.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Validation trait and implementations
// ============================================================================

/// Trait for validating protocol messages.
pub trait Validate {
    /// Validate the message fields.
    fn validate(&self) -> ValidationResult<()>;
}

impl Validate for PublicKeyV1 {
    fn validate(&self) -> ValidationResult<()> {
        match self.key_type_enum() {
            KeyTypeV1::Ed25519 => {
                validate_exact_size("key_bytes", &self.key_bytes, sizes::ED25519_PUB_SIZE)
            }
            KeyTypeV1::EcdsaP256 => {
                validate_exact_size("key_bytes", &self.key_bytes, sizes::P256_PUB_SIZE)
            }
            KeyTypeV1::Unspecified => Err(ValidationError::InvalidData {
                field: "key_type",
                reason: "unsupported key type",
            }),
        }
    }
}

impl Validate for MessageV1 {
    fn validate(&self) -> ValidationResult<()> {
        match self.topic.as_deref() {
            Some(topic) if !topic.is_empty() => {}
            _ => return Err(ValidationError::EmptyField { field: "topic" }),
        }
        if let Some(ref from) = self.from {
            validate_size_range("from", from, 1, sizes::MAX_FROM_SIZE)?;
        }
        if let Some(ref seqno) = self.seqno {
            validate_exact_size("seqno", seqno, sizes::SEQNO_SIZE)?;
        }
        if let Some(ref signature) = self.signature {
            validate_size_range("signature", signature, 1, sizes::MAX_SIG_SIZE)?;
        }
        if let Some(ref key) = self.key {
            validate_size_range("key", key, 1, sizes::MAX_KEY_SIZE)?;
        }
        Ok(())
    }
}
