//! Unified error type for descriptor parsing and validation.
//!
//! We avoid `alloc` - all variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Construction of the built-in descriptors cannot fail at runtime;
//! these errors only surface when checking records against the wire
//! invariants (tests, or descriptors received from elsewhere).

/// Descriptor-level error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The length field disagrees with the payload size.
    ///
    /// `expected` is `2 + 2 * code_unit_count`.
    LengthMismatch { declared: u8, expected: u8 },

    /// The descriptor type tag is not 3 (STRING).
    WrongDescriptorType(u8),

    /// Wire data ends before the declared length.
    Truncated { declared: u8, available: u8 },

    /// Payload is not valid UTF-16 or exceeds the decode buffer.
    InvalidText,
}
