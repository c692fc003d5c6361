//! Pubsub message value types.
//!
//! `UnsignedMessage` is the publish-side unit and `SignedMessage` the
//! network-side unit. Keeping them distinct types means a message cannot
//! be signed twice or verified before it is signed; the only way from one
//! to the other is through the signer.

use std::fmt;

use bytes::Bytes;

use gsw_crypto::peer::{PeerId, PeerIdError};
use gsw_proto::v1::MessageV1;
use gsw_proto::validation::{Validate, ValidationError};

/// Error type for wire-to-core message conversion.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("wire message failed validation: {0}")]
    Invalid(#[from] ValidationError),
    #[error("missing field: {0}")]
    Missing(&'static str),
    #[error("malformed originator identifier: {0}")]
    BadOriginator(#[from] PeerIdError),
    #[error("message already carries a signature")]
    AlreadySigned,
    #[error("random source unavailable")]
    Rng,
}

/// A message before signing.
///
/// Carries exactly the fields the signature will cover; `signature` and
/// `key` exist only on [`SignedMessage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsignedMessage {
    /// Originator identifier the message will be signed under.
    pub from: PeerId,
    /// Application payload, opaque here.
    pub data: Bytes,
    /// Per-originator sequence marker, opaque here.
    pub seqno: Bytes,
    /// Topic the message is published to.
    pub topic: String,
}

impl UnsignedMessage {
    /// Parse a wire message that has not been signed yet.
    ///
    /// A wire message already carrying `signature` or `key` fails with
    /// [`MessageError::AlreadySigned`]: re-signing is refused rather than
    /// silently overwriting what is there.
    pub fn from_wire(wire: &MessageV1) -> Result<Self, MessageError> {
        wire.validate()?;
        if wire.signature.is_some() || wire.key.is_some() {
            return Err(MessageError::AlreadySigned);
        }
        signable_fields(wire)
    }

    /// Wire form with exactly the four signable fields present.
    pub fn to_wire(&self) -> MessageV1 {
        MessageV1 {
            from: Some(self.from.to_bytes()),
            data: Some(self.data.to_vec()),
            seqno: Some(self.seqno.to_vec()),
            topic: Some(self.topic.clone()),
            signature: None,
            key: None,
        }
    }
}

/// A message carrying its signature, as sent to or received from the
/// network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedMessage {
    /// The signable content.
    pub message: UnsignedMessage,
    /// Signature over the domain-prefixed canonical encoding.
    pub signature: Bytes,
    /// Encoded `PublicKeyV1` of the originator, present only when `from`
    /// does not embed the key.
    pub key: Option<Bytes>,
}

impl SignedMessage {
    /// Parse a wire message that must carry a signature.
    pub fn from_wire(wire: &MessageV1) -> Result<Self, MessageError> {
        wire.validate()?;
        let signature = wire
            .signature
            .as_deref()
            .ok_or(MessageError::Missing("signature"))?;
        Ok(Self {
            message: signable_fields(wire)?,
            signature: Bytes::copy_from_slice(signature),
            key: wire.key.as_deref().map(Bytes::copy_from_slice),
        })
    }

    /// Wire form carrying every present field.
    pub fn to_wire(&self) -> MessageV1 {
        let mut wire = self.message.to_wire();
        wire.signature = Some(self.signature.to_vec());
        wire.key = self.key.as_ref().map(|key| key.to_vec());
        wire
    }

    /// Network-wide identity of this message.
    pub fn id(&self) -> MessageId {
        MessageId::new(&self.message.from, &self.message.seqno)
    }
}

/// Read the four signable fields out of a wire message.
///
/// `from`, `seqno` and `topic` are required; absent `data` reads as empty,
/// and the one canonical form re-encodes it as present.
fn signable_fields(wire: &MessageV1) -> Result<UnsignedMessage, MessageError> {
    let from = wire.from.as_deref().ok_or(MessageError::Missing("from"))?;
    let seqno = wire.seqno.as_deref().ok_or(MessageError::Missing("seqno"))?;
    let topic = wire.topic.clone().ok_or(MessageError::Missing("topic"))?;
    Ok(UnsignedMessage {
        from: PeerId::from_bytes(from)?,
        data: Bytes::copy_from_slice(wire.data.as_deref().unwrap_or_default()),
        seqno: Bytes::copy_from_slice(seqno),
        topic,
    })
}

/// Network-wide message identity: the originator's raw identifier bytes
/// followed by the seqno bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(Vec<u8>);

impl MessageId {
    fn new(from: &PeerId, seqno: &[u8]) -> Self {
        let from = from.to_bytes();
        let mut id = Vec::with_capacity(from.len() + seqno.len());
        id.extend_from_slice(&from);
        id.extend_from_slice(seqno);
        Self(id)
    }

    /// The raw identity bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

/// Fresh 8-byte sequence marker from the OS random source, for publishers
/// that do not keep a counter.
pub fn random_seqno() -> Result<[u8; 8], MessageError> {
    let mut seqno = [0u8; 8];
    getrandom::getrandom(&mut seqno).map_err(|_| MessageError::Rng)?;
    Ok(seqno)
}
