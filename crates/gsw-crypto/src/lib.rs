#![forbid(unsafe_code)]

pub mod keys;
pub mod peer;

#[cfg(test)]
mod proptests;
