//! Deterministic random number generation for header draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same header digits
//! - **Auditable**: A board records its draw seed, so anyone can re-derive
//!   the headers and check they were not tampered with
//! - **Context streams**: Rows, columns and shotgun bands draw from
//!   independent sequences
//!
//! ```
//! use squares_engine::core::DigitRng;
//!
//! let mut a = DigitRng::new(42);
//! let mut b = DigitRng::new(42);
//! assert_eq!(a.shuffle(&[0, 1, 2, 3]), b.shuffle(&[0, 1, 2, 3]));
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG used for every digit draw.
///
/// Uses ChaCha8: fast, and uniform enough that `gen_range` introduces no
/// modulo bias into the shuffle.
#[derive(Clone, Debug)]
pub struct DigitRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DigitRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded, see [`DigitRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain: the context seed is a fixed
    /// SplitMix64 fold over the seed and the context bytes.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Uniform index in `0..=upper`.
    ///
    /// Sampled as `u64` so 32-bit targets consume the same stream.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper as u64) as usize
    }

    /// Return a uniformly shuffled copy of `items`.
    ///
    /// Durstenfeld's variant of Fisher-Yates: walk `i` from the last index
    /// down to 1 and swap element `i` with a uniform pick from `0..=i`.
    /// The input is left untouched.
    #[must_use]
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.gen_index(i);
            out.swap(i, j);
        }
        out
    }

    /// Snapshot for audit records.
    #[must_use]
    pub fn state(&self) -> DigitRngState {
        DigitRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DigitRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Fold a context label into a seed.
fn context_seed(seed: u64, context: &str) -> u64 {
    context
        .bytes()
        .fold(splitmix64(seed), |state, byte| splitmix64(state ^ u64::from(byte)))
}

/// SplitMix64 step: one increment plus the variant-13 finalizer.
fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE5_E9B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
