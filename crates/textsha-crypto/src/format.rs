//! # Formatter
//!
//! Renders a final state as the 64-character lowercase hex digest.

use textsha_core::{HashState, Sha256Digest};

/// Render `state` as hex: eight digits per word, `H[0]` first.
pub fn format_hex(state: &HashState) -> String {
    state.words().iter().map(|w| format!("{w:08x}")).collect()
}

/// Convert a final state into a typed digest.
pub fn to_digest(state: &HashState) -> Sha256Digest {
    Sha256Digest::from_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_every_word_to_eight_digits() {
        let state = HashState::new([0, 1, 0xf, 0x10, 0xabc, 0x0012_3456, 0xffff_ffff, 0x8000_0000]);
        assert_eq!(
            format_hex(&state),
            "00000000000000010000000f0000001000000abc00123456ffffffff80000000"
        );
    }

    #[test]
    fn agrees_with_typed_digest() {
        let state = HashState::new([
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
            0xf20015ad,
        ]);
        assert_eq!(format_hex(&state), to_digest(&state).to_hex());
    }
}
