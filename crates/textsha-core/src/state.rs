//! # Hash State
//!
//! The eight-word running state threaded through every block of one digest
//! computation. A fresh state is created per call and never shared.

/// Number of 32-bit words in the SHA-256 state.
pub const STATE_WORDS: usize = 8;

/// SHA-256 running state `H[0..8]`.
///
/// Words are plain `u32`; every update must use wrapping arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState([u32; STATE_WORDS]);

impl HashState {
    /// Create a state from explicit words.
    pub const fn new(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Borrow the state words in `H[0]..H[7]` order.
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Mutably borrow the state words.
    pub fn words_mut(&mut self) -> &mut [u32; STATE_WORDS] {
        &mut self.0
    }

    /// Serialize the state big-endian, `H[0]` first.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl From<[u32; STATE_WORDS]> for HashState {
    fn from(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }
}
