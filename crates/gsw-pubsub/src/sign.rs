//! Message signing and the canonical signable encoding.

use bytes::Bytes;
use prost::Message;

use gsw_crypto::keys::{KeyError, Keypair};
use gsw_proto::v1::MessageV1;

use crate::message::{SignedMessage, UnsignedMessage};

/// Domain-separation prefix for pubsub message signatures. Never reused
/// for any other signing purpose.
pub const SIGN_PREFIX: &[u8] = b"libp2p-pubsub:";

/// Error type for signing operations.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error("sign operation failed: {0}")]
    Key(#[from] KeyError),
    #[error("`from` is not the signing keypair's identifier")]
    FromMismatch,
}

/// The signable view of a message: exactly the fields the signature
/// covers, with the originator already in raw identifier form.
///
/// `signature` and `key` have no representation here, so they cannot leak
/// into the encoding.
#[derive(Clone, Debug)]
pub struct SignableMessage<'a> {
    from: Vec<u8>,
    data: &'a [u8],
    seqno: &'a [u8],
    topic: &'a str,
}

impl<'a> SignableMessage<'a> {
    /// Build the view from an unsigned message.
    pub fn from_unsigned(message: &'a UnsignedMessage) -> Self {
        Self {
            from: message.from.to_bytes(),
            data: message.data.as_ref(),
            seqno: message.seqno.as_ref(),
            topic: message.topic.as_str(),
        }
    }

    /// Build the view from a signed message.
    pub fn from_signed(message: &'a SignedMessage) -> Self {
        Self::from_unsigned(&message.message)
    }

    /// Canonical encoding: the wire protobuf restricted to the signable
    /// fields, each with explicit presence.
    pub fn encode(&self) -> Vec<u8> {
        MessageV1 {
            from: Some(self.from.clone()),
            data: Some(self.data.to_vec()),
            seqno: Some(self.seqno.to_vec()),
            topic: Some(self.topic.to_string()),
            signature: None,
            key: None,
        }
        .encode_to_vec()
    }

    /// The bytes that are actually signed and verified:
    /// `SIGN_PREFIX || encode()`.
    pub fn signing_input(&self) -> Vec<u8> {
        let encoded = self.encode();
        let mut input = Vec::with_capacity(SIGN_PREFIX.len() + encoded.len());
        input.extend_from_slice(SIGN_PREFIX);
        input.extend_from_slice(&encoded);
        input
    }
}

/// Sign `message` with `keypair`, producing its network form.
///
/// Notes:
/// - `message.from` must be the identifier of `keypair`'s public key;
///   anything else fails with [`SignError::FromMismatch`] since such a
///   signature could never verify.
/// - The `key` field is attached only when `from` does not embed the key.
pub fn sign_message(
    keypair: &Keypair,
    message: UnsignedMessage,
) -> Result<SignedMessage, SignError> {
    let public = keypair.public();
    if !message.from.matches_key(&public) {
        return Err(SignError::FromMismatch);
    }

    let input = SignableMessage::from_unsigned(&message).signing_input();
    let signature = keypair.sign(&input)?;

    let key = if message.from.embeds_key() {
        None
    } else {
        Some(Bytes::from(public.to_protobuf()))
    };

    Ok(SignedMessage {
        message,
        signature: Bytes::from(signature),
        key,
    })
}
