//! # Padder
//!
//! Appends the SHA-256 padding: one `0x80` unit, the minimum run of zero
//! units, then the message length in bits as eight big-endian units. The
//! result is always a whole number of blocks.

use crate::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::encode::Unit;

/// Length of the padded form of a `len`-unit message.
pub fn padded_len(len: usize) -> usize {
    (len + 1 + LENGTH_FIELD_LEN).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Return `units` followed by its SHA-256 padding.
///
/// The bit length is computed in 64 bits. It is exact for every message
/// below `2^61` units, which [`textsha_core::InputPolicy`] enforces on the
/// checked entry points; beyond that it wraps modulo `2^64`.
pub fn pad(units: &[Unit]) -> Vec<Unit> {
    let total = padded_len(units.len());
    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(units);
    padded.push(0x80);
    padded.resize(total - LENGTH_FIELD_LEN, 0);

    let bit_len = (units.len() as u64).wrapping_mul(8);
    padded.extend(bit_len.to_be_bytes().into_iter().map(Unit::from));
    padded
}
