//! Network-wide signature policy.
//!
//! A deployment runs one policy for every peer and topic: either all
//! messages are signed and verifiable, or none carry author information at
//! all. Mixing the two would let an attacker strip signatures from the
//! subset of messages a victim would still accept.

use gsw_proto::v1::MessageV1;

/// Error type for policy admission checks.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("strict signing requires field: {0}")]
    MissingField(&'static str),
    #[error("no-sign policy forbids field: {0}")]
    ForbiddenField(&'static str),
}

/// Signature policy a deployment runs under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignaturePolicy {
    /// Every message is signed by its originator and verified on receipt.
    #[default]
    StrictSign,
    /// Messages are anonymous: author and signature fields must be absent.
    StrictNoSign,
}

impl SignaturePolicy {
    /// Whether locally published messages go through the signer.
    pub fn must_sign(&self) -> bool {
        matches!(self, Self::StrictSign)
    }

    /// Structural admission check for a received wire message.
    ///
    /// Presence checking only; signature verification is a separate step
    /// for messages admitted under strict signing.
    pub fn check_incoming(&self, wire: &MessageV1) -> Result<(), PolicyError> {
        match self {
            Self::StrictSign => {
                if !wire.has_origin() {
                    return Err(PolicyError::MissingField("from"));
                }
                if wire.seqno.is_none() {
                    return Err(PolicyError::MissingField("seqno"));
                }
                if !wire.is_signed() {
                    return Err(PolicyError::MissingField("signature"));
                }
                Ok(())
            }
            Self::StrictNoSign => {
                if wire.has_origin() {
                    return Err(PolicyError::ForbiddenField("from"));
                }
                if wire.seqno.is_some() {
                    return Err(PolicyError::ForbiddenField("seqno"));
                }
                if wire.is_signed() {
                    return Err(PolicyError::ForbiddenField("signature"));
                }
                if wire.key.is_some() {
                    return Err(PolicyError::ForbiddenField("key"));
                }
                Ok(())
            }
        }
    }
}
