//! Wire format types for the GossipWire protocol.
//!
//! Message and key types are generated from `gsw_v1.proto` by `prost-build`.
//! Hand-written constructors and accessors live in [`conversions`];
//! structural field checks live in [`validation`].

#![forbid(unsafe_code)]

/// Generated types for the `gossipwire.v1` package.
pub mod v1 {
    include!(concat!(env!("OUT_DIR"), "/gossipwire.v1.rs"));
}

pub mod conversions;
pub mod validation;

#[cfg(test)]
mod proptests;
