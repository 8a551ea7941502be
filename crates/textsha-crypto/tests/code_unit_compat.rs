//! # Code-Unit Compatibility Tests
//!
//! The default encoding feeds UTF-16 code units straight into word
//! assembly. These tests pin down what that means for digests:
//!
//! 1. Units up to `0xFF` behave like Latin-1 bytes.
//! 2. Wider units overlap neighbouring byte lanes. The expected digests are
//!    built by hand-assembling the padded block as bytes and running it
//!    through `sha2::compress256`, so they do not depend on this crate's
//!    word assembly.

use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256};
use textsha_crypto::{digest, digest_with, TextEncoding, H0};

/// Digest of one hand-built 64-byte block, starting from the initial state.
fn single_block_hex(block: [u8; 64]) -> String {
    let mut state = H0;
    sha2::compress256(&mut state, &[GenericArray::clone_from_slice(&block)]);
    state.iter().map(|w| format!("{w:08x}")).collect()
}

#[test]
fn test_latin1_range_hashes_as_single_bytes() {
    let text = "caf\u{e9}";
    let latin1: Vec<u8> = text.chars().map(|c| c as u8).collect();
    let expected: String = Sha256::digest(&latin1)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    assert_eq!(digest(text), expected);
    assert_ne!(digest(text), digest_with(text, TextEncoding::Utf8));
}

#[test]
fn test_wide_unit_in_first_lane() {
    // "€" is the single unit 0x20ac. In the top lane only its low byte
    // survives the shift; the 0x80 marker follows in the next lane.
    let mut block = [0u8; 64];
    block[0] = 0xac;
    block[1] = 0x80;
    block[63] = 8;
    assert_eq!(digest("\u{20ac}"), single_block_hex(block));
}

#[test]
fn test_wide_unit_overlaps_previous_lane() {
    // "a€": 0x20ac in the second lane spills 0x20 into the first lane,
    // where it is OR-ed with 'a' (0x61 | 0x20 = 0x61).
    let mut block = [0u8; 64];
    block[0] = 0x61;
    block[1] = 0xac;
    block[2] = 0x80;
    block[63] = 16;
    assert_eq!(digest("a\u{20ac}"), single_block_hex(block));
}

#[test]
fn test_surrogate_pair_is_two_units() {
    // U+1F600 is 0xd83d 0xde00. Lane 0 gets 0x3d | 0xde, lane 1 gets 0x00.
    let mut block = [0u8; 64];
    block[0] = 0x3d | 0xde;
    block[1] = 0x00;
    block[2] = 0x80;
    block[63] = 16;
    assert_eq!(digest("\u{1f600}"), single_block_hex(block));
}

#[test]
fn test_length_counts_code_units_not_bytes() {
    // Three units (not nine UTF-8 bytes) of 0xff-or-less values.
    let text = "\u{ff}\u{fe}\u{fd}";
    let mut block = [0u8; 64];
    block[..3].copy_from_slice(&[0xff, 0xfe, 0xfd]);
    block[3] = 0x80;
    block[63] = 24;
    assert_eq!(digest(text), single_block_hex(block));
}
