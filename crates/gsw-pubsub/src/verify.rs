//! Signature verification and originator key resolution.

use gsw_crypto::keys::{KeyError, PublicKey};

use crate::message::SignedMessage;
use crate::sign::SignableMessage;

/// Error type for resolving the key a message must verify under.
#[derive(Debug, thiserror::Error)]
pub enum KeyResolutionError {
    #[error("embedded key does not match the originator identifier")]
    KeyMismatch,
    #[error("no public key obtainable from the originator identifier")]
    KeyUnavailable,
    #[error("embedded key is malformed: {0}")]
    InvalidKey(#[from] KeyError),
}

/// Resolve the public key `message` must verify under.
///
/// An explicitly attached key must derive the claimed originator
/// identifier; with no attached key, the identifier itself must embed one.
pub fn resolve_public_key(message: &SignedMessage) -> Result<PublicKey, KeyResolutionError> {
    match &message.key {
        Some(key_bytes) => {
            let key = PublicKey::from_protobuf(key_bytes)?;
            if !message.message.from.matches_key(&key) {
                return Err(KeyResolutionError::KeyMismatch);
            }
            Ok(key)
        }
        None => message
            .message
            .from
            .embedded_key()
            .cloned()
            .ok_or(KeyResolutionError::KeyUnavailable),
    }
}

/// Check `message`'s signature against its resolved originator key.
///
/// Rebuilds the domain-prefixed canonical encoding from the message fields
/// and verifies the signature over it. A signature that fails
/// cryptographically, including one whose bytes do not parse, is
/// `Ok(false)`; failing to resolve any key at all is an error.
pub fn verify_message(message: &SignedMessage) -> Result<bool, KeyResolutionError> {
    let input = SignableMessage::from_signed(message).signing_input();
    let key = resolve_public_key(message)?;
    Ok(key.verify(&input, &message.signature))
}
