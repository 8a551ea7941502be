//! # Input Size Policy
//!
//! SHA-256 encodes the message length in bits as a 64-bit field, so no
//! message of `2^61` units or more can be hashed. Callers may tighten this
//! with an explicit limit; the library default is the hard cap alone.

use crate::error::DigestError;

/// Largest message length, in units, whose bit length fits the 64-bit
/// length field.
pub const MAX_MESSAGE_UNITS: u64 = (1 << 61) - 1;

/// Upper bound on the encoded message length accepted by a digest call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    max_units: u64,
}

impl InputPolicy {
    /// Accept anything the length field can represent.
    pub const fn unbounded() -> Self {
        Self {
            max_units: MAX_MESSAGE_UNITS,
        }
    }

    /// Accept at most `max_units` units. Values above the hard cap are
    /// clamped to it.
    pub const fn with_max_units(max_units: u64) -> Self {
        let max_units = if max_units > MAX_MESSAGE_UNITS {
            MAX_MESSAGE_UNITS
        } else {
            max_units
        };
        Self { max_units }
    }

    /// The effective limit in units.
    pub fn max_units(&self) -> u64 {
        self.max_units
    }

    /// Check an encoded message length against the policy.
    pub fn check(&self, units: usize) -> Result<(), DigestError> {
        let units = units as u64;
        if units > self.max_units {
            return Err(DigestError::InputTooLarge {
                units,
                limit: self.max_units,
            });
        }
        Ok(())
    }
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self::unbounded()
    }
}
