//! Originator identifiers.
//!
//! An identifier is a self-describing digest over the protobuf encoding of
//! the peer's public key: small keys ride inline under the identity code,
//! larger keys are replaced by their SHA-256 digest. The raw byte form
//! (code varint, length varint, digest) is what travels in `MessageV1.from`
//! and what all identifier comparisons are defined over.

use std::fmt;

use constant_time_eq::constant_time_eq;
use prost::encoding::{decode_varint, encode_varint};
use sha2::{Digest, Sha256};

use gsw_proto::validation::sizes;

use crate::keys::{KeyError, PublicKey};

/// Digest code for identifiers that carry the encoded key itself.
pub const CODE_IDENTITY: u64 = 0x00;
/// Digest code for SHA-256 identifiers.
pub const CODE_SHA2_256: u64 = 0x12;

/// Error type for identifier parsing.
#[derive(Debug, thiserror::Error)]
pub enum PeerIdError {
    #[error("malformed identifier framing")]
    Malformed,
    #[error("unknown digest code {0}")]
    UnknownCode(u64),
    #[error("digest length {got} does not match code (expected {expected})")]
    DigestLength { expected: usize, got: usize },
    #[error("inline key of {got} bytes exceeds the {max}-byte cap")]
    InlineKeyTooLarge { got: usize, max: usize },
    #[error("inline key is not a valid public key: {0}")]
    InlineKey(#[from] KeyError),
}

/// A peer identifier, tagged by how it encodes the peer's public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PeerId {
    /// The identifier embeds the public key itself.
    InlineKey(PublicKey),
    /// The identifier is the SHA-256 digest of the encoded public key.
    KeyHash([u8; 32]),
}

impl PeerId {
    /// Derive the canonical identifier for a public key.
    ///
    /// Keys whose encoding fits the inline cap are embedded; larger keys
    /// are hashed.
    pub fn from_public_key(key: &PublicKey) -> Self {
        let encoded = key.to_protobuf();
        if encoded.len() <= sizes::MAX_INLINE_KEY_LEN {
            Self::InlineKey(key.clone())
        } else {
            let mut hasher = Sha256::new();
            hasher.update(&encoded);
            let mut digest = [0u8; 32];
            digest.copy_from_slice(&hasher.finalize());
            Self::KeyHash(digest)
        }
    }

    /// Parse an identifier from its raw byte form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PeerIdError> {
        let mut rest = bytes;
        let code = decode_varint(&mut rest).map_err(|_| PeerIdError::Malformed)?;
        let len = decode_varint(&mut rest).map_err(|_| PeerIdError::Malformed)? as usize;
        if rest.len() != len {
            return Err(PeerIdError::Malformed);
        }
        match code {
            CODE_IDENTITY => {
                if len > sizes::MAX_INLINE_KEY_LEN {
                    return Err(PeerIdError::InlineKeyTooLarge {
                        got: len,
                        max: sizes::MAX_INLINE_KEY_LEN,
                    });
                }
                Ok(Self::InlineKey(PublicKey::from_protobuf(rest)?))
            }
            CODE_SHA2_256 => {
                if len != sizes::SHA256_DIGEST_SIZE {
                    return Err(PeerIdError::DigestLength {
                        expected: sizes::SHA256_DIGEST_SIZE,
                        got: len,
                    });
                }
                let mut digest = [0u8; 32];
                digest.copy_from_slice(rest);
                Ok(Self::KeyHash(digest))
            }
            other => Err(PeerIdError::UnknownCode(other)),
        }
    }

    /// The raw byte form carried in `MessageV1.from`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let (code, digest) = match self {
            Self::InlineKey(key) => (CODE_IDENTITY, key.to_protobuf()),
            Self::KeyHash(digest) => (CODE_SHA2_256, digest.to_vec()),
        };
        let mut bytes = Vec::with_capacity(2 + digest.len());
        encode_varint(code, &mut bytes);
        encode_varint(digest.len() as u64, &mut bytes);
        bytes.extend_from_slice(&digest);
        bytes
    }

    /// Whether this identifier embeds a recoverable public key.
    pub fn embeds_key(&self) -> bool {
        matches!(self, Self::InlineKey(_))
    }

    /// The embedded public key, for identifiers that carry one.
    pub fn embedded_key(&self) -> Option<&PublicKey> {
        match self {
            Self::InlineKey(key) => Some(key),
            Self::KeyHash(_) => None,
        }
    }

    /// Constant-time check that `key` derives exactly this identifier.
    pub fn matches_key(&self, key: &PublicKey) -> bool {
        let derived = Self::from_public_key(key);
        constant_time_eq(&self.to_bytes(), &derived.to_bytes())
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}
