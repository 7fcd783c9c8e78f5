//! USB string descriptor record.
//!
//! Wire layout (bit-exact, what the host receives):
//! ```text
//! Byte 0:   bLength          = 2 + 2*N
//! Byte 1:   bDescriptorType  = 3 (STRING)
//! Byte 2..: bString          N UTF-16LE code units
//! ```
//! No terminator, no padding.  `bLength` counts the two header bytes.
//!
//! `N` is the code-unit count, fixed per descriptor at the type level.
//! Construction is `const`, so the built-in name descriptors are plain
//! read-only data with the length field checked against the actual
//! string when the crate compiles.

use crate::error::Error;

/// USB descriptor type tag for string descriptors.
pub const DESCRIPTOR_TYPE_STRING: u8 = 3;

/// Largest code-unit count whose descriptor length still fits in `u8`.
pub const MAX_CODE_UNITS: usize = (u8::MAX as usize - 2) / 2;

/// A USB string descriptor holding `N` UTF-16LE code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StringDescriptor<const N: usize> {
    /// Total descriptor length in bytes, header included.
    pub length: u8,
    /// Descriptor type tag (always 3 for well-formed records).
    pub descriptor_type: u8,
    /// UTF-16LE code units of the human-readable string.
    pub code_units: [u16; N],
}

impl<const N: usize> StringDescriptor<N> {
    /// Total wire size of this descriptor in bytes.
    pub const WIRE_SIZE: usize = 2 + 2 * N;

    /// Build a descriptor from an ASCII string literal.
    ///
    /// Evaluated at compile time for the crate's constants: a string
    /// whose length differs from the declared count `N`, or that
    /// contains non-ASCII bytes, aborts the build.
    pub const fn from_ascii(s: &str) -> Self {
        let bytes = s.as_bytes();
        assert!(
            bytes.len() == N,
            "declared character count must match the string length"
        );
        assert!(N <= MAX_CODE_UNITS, "descriptor length must fit in u8");

        let mut code_units = [0u16; N];
        let mut i = 0;
        while i < N {
            assert!(bytes[i].is_ascii(), "device strings must be ASCII");
            code_units[i] = bytes[i] as u16;
            i += 1;
        }

        Self {
            length: (2 + 2 * N) as u8,
            descriptor_type: DESCRIPTOR_TYPE_STRING,
            code_units,
        }
    }

    /// Encode into a fixed array of exactly the wire size.
    ///
    /// `M` must equal [`Self::WIRE_SIZE`]; anything else aborts the
    /// build.  Used to pre-encode the crate's constants so the USB
    /// stack can hand the bytes straight to the host.
    pub const fn encode<const M: usize>(&self) -> [u8; M] {
        assert!(M == 2 + 2 * N, "output array must match the wire size");

        let mut out = [0u8; M];
        out[0] = self.length;
        out[1] = self.descriptor_type;
        let mut i = 0;
        while i < N {
            let [lo, hi] = self.code_units[i].to_le_bytes();
            out[2 + 2 * i] = lo;
            out[3 + 2 * i] = hi;
            i += 1;
        }
        out
    }

    /// Serialise into a byte slice for transmission.
    /// Returns the number of bytes written, or 0 if `buf` is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < Self::WIRE_SIZE {
            return 0;
        }
        buf[0] = self.length;
        buf[1] = self.descriptor_type;
        for (i, unit) in self.code_units.iter().enumerate() {
            buf[2 + 2 * i..4 + 2 * i].copy_from_slice(&unit.to_le_bytes());
        }
        Self::WIRE_SIZE
    }

    /// Parse a descriptor back from wire bytes.
    ///
    /// Checks the header against the invariants before accepting the
    /// payload; trailing bytes beyond the declared length are ignored.
    pub fn parse(data: &[u8]) -> Result<Self, Error> {
        if data.len() < 2 {
            return Err(Error::Truncated {
                declared: 2,
                available: data.len() as u8,
            });
        }
        let length = data[0];
        let descriptor_type = data[1];
        if descriptor_type != DESCRIPTOR_TYPE_STRING {
            return Err(Error::WrongDescriptorType(descriptor_type));
        }
        let expected = (2 + 2 * N) as u8;
        if length != expected {
            return Err(Error::LengthMismatch {
                declared: length,
                expected,
            });
        }
        if data.len() < Self::WIRE_SIZE {
            return Err(Error::Truncated {
                declared: length,
                available: data.len() as u8,
            });
        }

        let mut code_units = [0u16; N];
        for (i, unit) in code_units.iter_mut().enumerate() {
            *unit = u16::from_le_bytes([data[2 + 2 * i], data[3 + 2 * i]]);
        }
        Ok(Self {
            length,
            descriptor_type,
            code_units,
        })
    }

    /// Check the record against the wire invariants.
    ///
    /// `length == 2 + 2*N` and `descriptor_type == 3`.  The crate's own
    /// constants always pass; this exists for records built or received
    /// some other way.
    pub fn validate(&self) -> Result<(), Error> {
        if self.descriptor_type != DESCRIPTOR_TYPE_STRING {
            return Err(Error::WrongDescriptorType(self.descriptor_type));
        }
        let expected = (2 + 2 * N) as u8;
        if self.length != expected {
            return Err(Error::LengthMismatch {
                declared: self.length,
                expected,
            });
        }
        Ok(())
    }

    /// Decode the payload back to text (UTF-16LE).
    pub fn decode_text<const CAP: usize>(&self) -> Result<heapless::String<CAP>, Error> {
        let mut text = heapless::String::new();
        for decoded in core::char::decode_utf16(self.code_units.iter().copied()) {
            let c = decoded.map_err(|_| Error::InvalidText)?;
            text.push(c).map_err(|_| Error::InvalidText)?;
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ascii_fills_header_and_payload() {
        let desc = StringDescriptor::<4>::from_ascii("MIDI");
        assert_eq!(desc.length, 10);
        assert_eq!(desc.descriptor_type, DESCRIPTOR_TYPE_STRING);
        assert_eq!(desc.code_units, [0x4D, 0x49, 0x44, 0x49]);
        assert!(desc.validate().is_ok());
    }

    #[test]
    fn length_invariant_holds_for_any_code_unit_count() {
        assert_eq!(StringDescriptor::<1>::from_ascii("A").length, 2 + 2 * 1);
        assert_eq!(StringDescriptor::<7>::from_ascii("BCA VUM").length, 2 + 2 * 7);
        assert_eq!(
            StringDescriptor::<14>::from_ascii("BLUE CAT AUDIO").length,
            2 + 2 * 14
        );
    }

    #[test]
    fn encode_produces_wire_bytes() {
        let desc = StringDescriptor::<2>::from_ascii("Hi");
        let bytes: [u8; 6] = desc.encode();
        assert_eq!(bytes, [6, 3, 0x48, 0x00, 0x69, 0x00]);
    }

    #[test]
    fn serialize_matches_encode() {
        let desc = StringDescriptor::<4>::from_ascii("MIDI");
        let encoded: [u8; 10] = desc.encode();

        let mut buf = [0u8; 10];
        let written = desc.serialize(&mut buf);
        assert_eq!(written, 10);
        assert_eq!(buf, encoded);
    }

    #[test]
    fn serialize_into_short_buffer_writes_nothing() {
        let desc = StringDescriptor::<4>::from_ascii("MIDI");
        let mut buf = [0u8; 9];
        assert_eq!(desc.serialize(&mut buf), 0);
        assert_eq!(buf, [0u8; 9]);
    }

    #[test]
    fn parse_roundtrip() {
        let original = StringDescriptor::<4>::from_ascii("MIDI");
        let bytes: [u8; 10] = original.encode();

        let parsed = StringDescriptor::<4>::parse(&bytes).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn parse_rejects_wrong_type_tag() {
        let mut bytes: [u8; 10] = StringDescriptor::<4>::from_ascii("MIDI").encode();
        bytes[1] = 4; // INTERFACE, not STRING
        assert_eq!(
            StringDescriptor::<4>::parse(&bytes),
            Err(Error::WrongDescriptorType(4))
        );
    }

    #[test]
    fn parse_rejects_length_mismatch() {
        let mut bytes: [u8; 10] = StringDescriptor::<4>::from_ascii("MIDI").encode();
        bytes[0] = 12; // claims one more code unit than the payload holds
        assert_eq!(
            StringDescriptor::<4>::parse(&bytes),
            Err(Error::LengthMismatch {
                declared: 12,
                expected: 10,
            })
        );
    }

    #[test]
    fn parse_rejects_truncated_data() {
        let bytes: [u8; 10] = StringDescriptor::<4>::from_ascii("MIDI").encode();
        assert_eq!(
            StringDescriptor::<4>::parse(&bytes[..7]),
            Err(Error::Truncated {
                declared: 10,
                available: 7,
            })
        );
    }

    #[test]
    fn validate_catches_corrupted_length_field() {
        let mut desc = StringDescriptor::<4>::from_ascii("MIDI");
        desc.length = 12;
        assert_eq!(
            desc.validate(),
            Err(Error::LengthMismatch {
                declared: 12,
                expected: 10,
            })
        );
    }

    #[test]
    fn decode_text_recovers_the_string() {
        let desc = StringDescriptor::<7>::from_ascii("BCA VUM");
        let text: heapless::String<16> = desc.decode_text().unwrap();
        assert_eq!(text.as_str(), "BCA VUM");
    }

    #[test]
    fn decode_text_rejects_lone_surrogate() {
        let mut desc = StringDescriptor::<4>::from_ascii("MIDI");
        desc.code_units[2] = 0xD800;
        let result: Result<heapless::String<16>, _> = desc.decode_text();
        assert_eq!(result, Err(Error::InvalidText));
    }
}
