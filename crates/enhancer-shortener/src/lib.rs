//! URL shortener service implementation.
//!
//! This crate ties a [`Generator`](enhancer_generator::Generator) to a
//! [`Repository`](enhancer_core::Repository) and exposes the pair as a
//! [`RedirectStore`](enhancer_core::RedirectStore). Core types are
//! re-exported from `enhancer_core`.

pub mod service;

pub use enhancer_core::{Identifier, RedirectStore, StoreError};
pub use service::{AllocationSettings, ShortenerService, DEFAULT_MAX_ATTEMPTS};
