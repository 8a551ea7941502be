//! # Compressor
//!
//! The SHA-256 block function. One call consumes one 64-unit block and
//! folds it into the running state; calls must be made for every block of
//! the padded message, in order, on the same state.

use textsha_core::HashState;

use crate::constants::{BLOCK_LEN, K, SCHEDULE_WORDS};
use crate::encode::Unit;

#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Assemble one big-endian word from four units.
///
/// Shifts happen in `u32`, so bits of a unit wider than a byte that move
/// past bit 31 are dropped and the rest overlap the next unit's lane.
#[inline]
fn load_word(units: &[Unit]) -> u32 {
    (u32::from(units[0]) << 24)
        | (u32::from(units[1]) << 16)
        | (u32::from(units[2]) << 8)
        | u32::from(units[3])
}

/// Expand a block into the 64-word message schedule.
pub fn schedule(block: &[Unit; BLOCK_LEN]) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, units) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = load_word(units);
    }
    for t in 16..SCHEDULE_WORDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

/// Fold one block into `state`.
pub fn compress(state: &mut HashState, block: &[Unit; BLOCK_LEN]) {
    let w = schedule(block);
    let h = state.words_mut();

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;

    for (k, wt) in K.iter().zip(w.iter()) {
        let t1 = hh
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*wt);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, v) in h.iter_mut().zip([a, b, c, d, e, f, g, hh]) {
        *word = word.wrapping_add(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::initial_state;
    use crate::pad::pad;

    fn block_of(units: &[Unit]) -> [Unit; BLOCK_LEN] {
        let mut block = [0; BLOCK_LEN];
        block.copy_from_slice(units);
        block
    }

    #[test]
    fn boolean_functions() {
        assert_eq!(ch(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
        assert_eq!(maj(0xff00_ff00, 0x0ff0_0ff0, 0x00ff_00ff), 0x0ff0_0ff0);
    }

    #[test]
    fn sigma_functions_use_logical_shift() {
        // The shifted term must not sign-extend.
        assert_eq!(small_sigma0(0x8000_0000), 0x1100_2000);
        assert_eq!(small_sigma1(0x8000_0000), 0x0020_5000);
        assert_eq!(big_sigma0(1), 0x4008_0400);
        assert_eq!(big_sigma1(1), 0x0420_0080);
    }

    #[test]
    fn load_word_is_big_endian() {
        assert_eq!(load_word(&[0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
    }

    #[test]
    fn load_word_overlaps_wide_units() {
        // 0x20ac << 24 keeps only 0xac; 0x20ac << 16 spills into the top byte.
        assert_eq!(load_word(&[0x20ac, 0, 0, 0]), 0xac00_0000);
        assert_eq!(load_word(&[0, 0x20ac, 0, 0]), 0x20ac_0000);
        assert_eq!(load_word(&[0x61, 0x20ac, 0x80, 0]), 0x61ac_8000);
    }

    #[test]
    fn schedule_keeps_first_sixteen_words() {
        let block = block_of(&pad(&[0x61, 0x62, 0x63]));
        let w = schedule(&block);
        assert_eq!(w[0], 0x6162_6380);
        assert!(w[1..15].iter().all(|&x| x == 0));
        assert_eq!(w[15], 24);
        // FIPS 180-2 appendix B.1, W[16].
        assert_eq!(w[16], 0x6162_6380);
    }

    #[test]
    fn abc_single_block_state() {
        let block = block_of(&pad(&[0x61, 0x62, 0x63]));
        let mut state = initial_state();
        compress(&mut state, &block);
        assert_eq!(
            state.words(),
            &[
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
    }

    #[test]
    fn state_threading_changes_result() {
        let block = block_of(&pad(&[]));
        let mut once = initial_state();
        compress(&mut once, &block);
        let mut twice = once;
        compress(&mut twice, &block);
        assert_ne!(once, twice);
    }
}
