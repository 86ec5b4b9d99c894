//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - [`entities::UrlMapping`] and [`entities::ShortCode`]
//! - [`repositories`] - persistence trait for the mapping
//! - [`reachability`] - outbound URL validation trait
//!
//! The domain layer has no dependency on axum, reqwest, or the filesystem.
//! Concrete implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod reachability;
pub mod repositories;
