use crate::identifier::Identifier;
use serde::{Deserialize, Serialize};

/// A committed association between an identifier and its target URL.
///
/// Entries are never updated or removed once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectEntry {
    /// The key handed out to the caller.
    pub identifier: Identifier,
    /// The URL the key redirects to. Opaque to the store.
    pub target_url: String,
}

impl RedirectEntry {
    pub fn new(identifier: Identifier, target_url: impl Into<String>) -> Self {
        Self {
            identifier,
            target_url: target_url.into(),
        }
    }
}
