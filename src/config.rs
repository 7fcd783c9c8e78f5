//! Device-identity constants - the crate's only customization surface.
//!
//! Edit the string and its declared character count together; the
//! descriptor builder asserts they agree at compile time, so a
//! mismatched pair fails the build.

// USB device strings

/// Product name shown by the host after enumeration.
pub const PRODUCT_NAME: &str = "BCA VUM";

/// Declared character count of [`PRODUCT_NAME`].
pub const PRODUCT_NAME_LEN: usize = 7;

/// Manufacturer name shown by the host after enumeration.
pub const MANUFACTURER_NAME: &str = "BLUE CAT AUDIO";

/// Declared character count of [`MANUFACTURER_NAME`].
pub const MANUFACTURER_NAME_LEN: usize = 14;

// String-descriptor index association
//
// Fixed by the external USB stack's device descriptor (iManufacturer /
// iProduct).  Index 0 is the LANGID descriptor, owned by the stack.

/// `GET_DESCRIPTOR` string index of the manufacturer name.
pub const MANUFACTURER_STRING_INDEX: u8 = 1;

/// `GET_DESCRIPTOR` string index of the product name.
pub const PRODUCT_STRING_INDEX: u8 = 2;
