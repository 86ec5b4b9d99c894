//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - JSON file mapping repository
//! - [`reachability`] - HTTP reachability validator

pub mod persistence;
pub mod reachability;
