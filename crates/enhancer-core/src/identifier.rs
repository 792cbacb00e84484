use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::borrow::Borrow;
use std::fmt::Display;

/// Characters an identifier may be drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Key length used when none is configured. 62^8 is roughly 2.18e14 keys.
pub const DEFAULT_KEY_LENGTH: usize = 8;

/// Longest key a generator may be configured for.
pub const MAX_KEY_LENGTH: usize = 64;

/// A short key referencing a stored URL.
///
/// Identifiers are only minted by a generator; they become unique once the
/// store accepts them.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(SmolStr);

impl Identifier {
    /// Creates an `Identifier` without validation.
    ///
    /// Use this only for keys produced by trusted internal sources
    /// (e.g. generators that draw from [`ALPHABET`]).
    pub fn new_unchecked(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the identifier.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every character belongs to [`ALPHABET`] and the length matches.
    pub fn conforms_to(&self, length: usize) -> bool {
        self.len() == length && self.0.bytes().all(|b| ALPHABET.contains(&b))
    }

    /// Joins the identifier onto `base_url`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }
}

impl std::fmt::Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Identifier").field(&self.0).finish()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// Lets maps keyed by `Identifier` be queried with a plain `&str`.
impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0.into()
    }
}
