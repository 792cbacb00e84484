use crate::error::GeneratorError;
use crate::Generator;
use enhancer_core::{Identifier, ALPHABET, DEFAULT_KEY_LENGTH, MAX_KEY_LENGTH};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws each character of a key uniformly from [`ALPHABET`].
///
/// The random source is seeded exactly once, when the generator is built,
/// and shared between callers behind a mutex. Concurrent callers therefore
/// consume disjoint parts of one stream instead of replaying the same seed.
pub struct RandomGenerator {
    length: usize,
    rng: Mutex<StdRng>,
}

impl RandomGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        Self::with_rng(length, StdRng::from_entropy())
    }

    /// Creates a generator with a fixed seed. The output is reproducible.
    pub fn with_seed(length: usize, seed: u64) -> Result<Self, GeneratorError> {
        Self::with_rng(length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(length: usize, rng: StdRng) -> Result<Self, GeneratorError> {
        if length == 0 || length > MAX_KEY_LENGTH {
            return Err(GeneratorError::InvalidKeyLength {
                length,
                max: MAX_KEY_LENGTH,
            });
        }

        Ok(Self {
            length,
            rng: Mutex::new(rng),
        })
    }

    /// The number of characters in every generated key.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        // `DEFAULT_KEY_LENGTH` lies within `1..=MAX_KEY_LENGTH`.
        Self::with_rng(DEFAULT_KEY_LENGTH, StdRng::from_entropy())
            .expect("default key length is always valid")
    }
}

impl std::fmt::Debug for RandomGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomGenerator")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> Identifier {
        let mut rng = self.rng.lock();
        let key: String = (0..self.length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Identifier::new_unchecked(key)
    }
}
