//! Signing keypairs and public keys for message authentication.
//!
//! Two algorithms are supported: Ed25519, whose keys are small enough to
//! ride inside originator identifiers, and ECDSA P-256, whose keys are
//! carried alongside messages instead. Public keys travel on the wire as
//! protobuf `PublicKeyV1` records.

use ed25519_dalek::{Signer, Verifier};
use prost::Message;
use rand_core::OsRng;
use zeroize::Zeroize;

use gsw_proto::v1::{KeyTypeV1, PublicKeyV1};
use gsw_proto::validation::sizes;

/// Error type for key operations.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },
    #[error("malformed key material")]
    MalformedKey,
    #[error("unsupported key type {0}")]
    UnsupportedKeyType(i32),
    #[error("signing failed")]
    SigningFailed,
}

/// A signing keypair, tagged by algorithm.
pub enum Keypair {
    Ed25519(ed25519_dalek::SigningKey),
    EcdsaP256(p256::ecdsa::SigningKey),
}

impl Keypair {
    /// Generate a new Ed25519 keypair using a secure random source.
    pub fn generate_ed25519() -> Self {
        Self::Ed25519(ed25519_dalek::SigningKey::generate(&mut OsRng))
    }

    /// Generate a new ECDSA P-256 keypair using a secure random source.
    pub fn generate_ecdsa_p256() -> Self {
        Self::EcdsaP256(p256::ecdsa::SigningKey::random(&mut OsRng))
    }

    /// Create an Ed25519 keypair from a 32-byte seed.
    ///
    /// The seed is wiped after use.
    pub fn from_seed_ed25519(mut seed: [u8; 32]) -> Self {
        let key = ed25519_dalek::SigningKey::from_bytes(&seed);
        seed.zeroize();
        Self::Ed25519(key)
    }

    /// Create an ECDSA P-256 keypair from 32 scalar bytes.
    ///
    /// The bytes are wiped after use. Fails for scalars outside the curve
    /// order (including zero).
    pub fn from_seed_ecdsa_p256(mut seed: [u8; 32]) -> Result<Self, KeyError> {
        let key = p256::ecdsa::SigningKey::from_slice(&seed).map_err(|_| KeyError::MalformedKey);
        seed.zeroize();
        Ok(Self::EcdsaP256(key?))
    }

    /// The verifying half of this keypair.
    pub fn public(&self) -> PublicKey {
        match self {
            Self::Ed25519(key) => PublicKey::Ed25519(key.verifying_key()),
            Self::EcdsaP256(key) => PublicKey::EcdsaP256(*key.verifying_key()),
        }
    }

    /// Sign `message`, producing signature bytes in the algorithm's wire
    /// form: 64 raw bytes for Ed25519, DER for ECDSA P-256.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, KeyError> {
        match self {
            Self::Ed25519(key) => {
                let signature: ed25519_dalek::Signature =
                    key.try_sign(message).map_err(|_| KeyError::SigningFailed)?;
                Ok(signature.to_bytes().to_vec())
            }
            Self::EcdsaP256(key) => {
                let signature: p256::ecdsa::Signature =
                    key.try_sign(message).map_err(|_| KeyError::SigningFailed)?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
        }
    }
}

/// A verifying public key, tagged by algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    Ed25519(ed25519_dalek::VerifyingKey),
    EcdsaP256(p256::ecdsa::VerifyingKey),
}

impl PublicKey {
    /// Verify `signature` over `message`.
    ///
    /// Any failure reports as `false`, including signature bytes that do
    /// not parse in the algorithm's wire form.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            Self::Ed25519(key) => {
                let raw: [u8; 64] = match signature.try_into() {
                    Ok(raw) => raw,
                    Err(_) => return false,
                };
                let sig = ed25519_dalek::Signature::from_bytes(&raw);
                key.verify_strict(message, &sig).is_ok()
            }
            Self::EcdsaP256(key) => match p256::ecdsa::Signature::from_der(signature) {
                Ok(sig) => key.verify(message, &sig).is_ok(),
                Err(_) => false,
            },
        }
    }

    /// The wire tag for this key's algorithm.
    pub fn key_type(&self) -> KeyTypeV1 {
        match self {
            Self::Ed25519(_) => KeyTypeV1::Ed25519,
            Self::EcdsaP256(_) => KeyTypeV1::EcdsaP256,
        }
    }

    /// Encode as a wire `PublicKeyV1` record.
    pub fn to_protobuf(&self) -> Vec<u8> {
        let record = match self {
            Self::Ed25519(key) => PublicKeyV1::ed25519(key.to_bytes().to_vec()),
            Self::EcdsaP256(key) => {
                PublicKeyV1::ecdsa_p256(key.to_encoded_point(false).as_bytes().to_vec())
            }
        };
        record.encode_to_vec()
    }

    /// Decode from a wire `PublicKeyV1` record.
    pub fn from_protobuf(bytes: &[u8]) -> Result<Self, KeyError> {
        let record = PublicKeyV1::decode(bytes).map_err(|_| KeyError::MalformedKey)?;
        match record.key_type_enum() {
            KeyTypeV1::Ed25519 => {
                let raw: [u8; 32] = record.key_bytes.as_slice().try_into().map_err(|_| {
                    KeyError::InvalidKeyLength {
                        expected: sizes::ED25519_PUB_SIZE,
                        got: record.key_bytes.len(),
                    }
                })?;
                let key = ed25519_dalek::VerifyingKey::from_bytes(&raw)
                    .map_err(|_| KeyError::MalformedKey)?;
                Ok(Self::Ed25519(key))
            }
            KeyTypeV1::EcdsaP256 => {
                // Only the uncompressed point form is canonical on the wire.
                if record.key_bytes.len() != sizes::P256_PUB_SIZE {
                    return Err(KeyError::InvalidKeyLength {
                        expected: sizes::P256_PUB_SIZE,
                        got: record.key_bytes.len(),
                    });
                }
                let key = p256::ecdsa::VerifyingKey::from_sec1_bytes(&record.key_bytes)
                    .map_err(|_| KeyError::MalformedKey)?;
                Ok(Self::EcdsaP256(key))
            }
            KeyTypeV1::Unspecified => Err(KeyError::UnsupportedKeyType(record.key_type)),
        }
    }
}
