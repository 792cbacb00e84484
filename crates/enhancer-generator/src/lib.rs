pub mod error;
pub mod random;

pub use error::GeneratorError;
pub use random::RandomGenerator;

use enhancer_core::Identifier;

/// Trait for generating candidate identifiers.
///
/// Implementations are pure generators that don't interact with storage.
/// A generated identifier is only a candidate: uniqueness is established
/// by the store that accepts it.
pub trait Generator: Send + Sync + 'static {
    /// Produces the next candidate identifier. Generation cannot fail.
    fn generate(&self) -> Identifier;
}
