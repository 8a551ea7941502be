//! # Encoder
//!
//! Turns text into the unit sequence the padder consumes. See
//! [`TextEncoding`] for the compatibility trade-off between the two modes.

use textsha_core::TextEncoding;

/// One element of the message before compression.
///
/// Under `Utf8` every unit is a byte. Under `CodeUnits` a unit may exceed
/// `0xFF`; word assembly in the compressor then lets its high bits overlap
/// the neighbouring unit.
pub type Unit = u16;

/// Encode `text` into hash input units.
pub fn encode(text: &str, encoding: TextEncoding) -> Vec<Unit> {
    match encoding {
        TextEncoding::CodeUnits => text.encode_utf16().collect(),
        TextEncoding::Utf8 => text.bytes().map(Unit::from).collect(),
    }
}

/// Number of units [`encode`] would produce, without allocating them.
pub fn encoded_len(text: &str, encoding: TextEncoding) -> usize {
    match encoding {
        TextEncoding::CodeUnits => text.encode_utf16().count(),
        TextEncoding::Utf8 => text.len(),
    }
}
