//! Utility functions.
//!
//! - [`encoder`] - deterministic short code derivation

pub mod encoder;
