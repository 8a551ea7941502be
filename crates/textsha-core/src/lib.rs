//! # textsha-core: Foundational Types for textsha
//!
//! This crate defines the types shared by the digest engine and the CLI.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Fixed-size state.** `HashState` is a `[u32; 8]` newtype passed by
//!    `&mut` into the compressor. No dynamic resizing, no sharing across calls.
//!
//! 2. **Typed digests.** `Sha256Digest` holds the 32 raw bytes and is the
//!    only way expected digests enter the system (parsed via `from_hex`).
//!
//! 3. **Explicit text encoding.** `TextEncoding` makes the code-unit versus
//!    UTF-8 choice visible at every call site that is not using the default.
//!
//! 4. **Bounded input.** `InputPolicy` turns the 64-bit length-field limit
//!    (and any tighter caller limit) into a typed error instead of a wrong
//!    digest.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `textsha-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod encoding;
pub mod error;
pub mod policy;
pub mod state;

// Re-export primary types for ergonomic imports.
pub use digest::{Sha256Digest, DIGEST_HEX_LEN, DIGEST_LEN};
pub use encoding::TextEncoding;
pub use error::{DigestError, TextshaError};
pub use policy::{InputPolicy, MAX_MESSAGE_UNITS};
pub use state::{HashState, STATE_WORDS};
