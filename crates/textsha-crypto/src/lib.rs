//! # textsha-crypto: The Digest Engine
//!
//! Computes SHA-256 over text and returns the lowercase hex digest. The
//! engine is four stages run in a straight line:
//!
//! - **Encoder** (`encode`): text to units, per [`TextEncoding`].
//! - **Padder** (`pad`): `0x80`, zeros, 64-bit big-endian bit length.
//! - **Compressor** (`compress`): message schedule plus 64 rounds per block.
//! - **Formatter** (`format`): state words to 64 hex characters.
//!
//! ## Crate Policy
//!
//! - Depends only on `textsha-core` internally.
//! - All word arithmetic is explicit `u32` wrapping arithmetic.
//! - Tests check against published vectors and the `sha2` crate; the engine
//!   itself never calls a third-party hash.
//! - No `unsafe` code.

pub mod compress;
pub mod constants;
pub mod encode;
pub mod format;
pub mod pad;
pub mod sha256;

pub use compress::{compress, schedule};
pub use constants::{BLOCK_LEN, H0, K};
pub use encode::{encode, encoded_len, Unit};
pub use format::{format_hex, to_digest};
pub use pad::{pad, padded_len};
pub use sha256::{digest, digest_with, DigestEngine};

pub use textsha_core::TextEncoding;
