//! Core types and traits for the URL enhancer.
//!
//! This crate provides the identifier and entry types, the error taxonomy and
//! the storage and store contracts shared by the generator, storage,
//! shortener and gateway crates.

pub mod entry;
pub mod error;
pub mod identifier;
pub mod repository;
pub mod store;

pub use entry::RedirectEntry;
pub use error::{StorageError, StoreError};
pub use identifier::{Identifier, ALPHABET, DEFAULT_KEY_LENGTH, MAX_KEY_LENGTH};
pub use repository::{ReadRepository, Repository};
pub use store::RedirectStore;
