//! Message authentication for GossipWire pubsub.
//!
//! Binds every published message to its originating peer: a message
//! carries the originator's identifier, a sequence marker, and a signature
//! over a canonical encoding, so any node can check provenance without
//! trusting the path the message arrived by.

#![forbid(unsafe_code)]

pub mod message;
pub mod policy;
pub mod sign;
pub mod verify;

#[cfg(test)]
mod proptests;
