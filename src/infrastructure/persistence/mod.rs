//! Repository implementations backed by local storage.
//!
//! - [`FileMappingRepository`] - single JSON file holding the whole mapping

pub mod file_mapping_repository;

pub use file_mapping_repository::FileMappingRepository;
