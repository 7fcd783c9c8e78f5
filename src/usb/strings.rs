//! The device's string descriptor table: product and manufacturer names.
//!
//! Both records and their wire images are built at compile time from
//! the literals in [`config`](crate::config).  The length fields are
//! derived, never hand-written, so the table cannot go out of sync with
//! the strings.

use crate::config;
use crate::descriptor::StringDescriptor;

/// Product name descriptor record (`"BCA VUM"`).
pub const PRODUCT_NAME: StringDescriptor<{ config::PRODUCT_NAME_LEN }> =
    StringDescriptor::from_ascii(config::PRODUCT_NAME);

/// Manufacturer name descriptor record (`"BLUE CAT AUDIO"`).
pub const MANUFACTURER_NAME: StringDescriptor<{ config::MANUFACTURER_NAME_LEN }> =
    StringDescriptor::from_ascii(config::MANUFACTURER_NAME);

/// Product name descriptor, pre-encoded in wire layout.
pub const PRODUCT_NAME_DESCRIPTOR: [u8; 2 + 2 * config::PRODUCT_NAME_LEN] =
    PRODUCT_NAME.encode();

/// Manufacturer name descriptor, pre-encoded in wire layout.
pub const MANUFACTURER_NAME_DESCRIPTOR: [u8; 2 + 2 * config::MANUFACTURER_NAME_LEN] =
    MANUFACTURER_NAME.encode();

/// Look up a string descriptor by its `GET_DESCRIPTOR` index.
///
/// Returns the wire bytes for the manufacturer (index 1) or product
/// (index 2) name.  Index 0 (LANGID) and everything else belongs to
/// the external stack and yields `None`.
pub fn string_descriptor(index: u8) -> Option<&'static [u8]> {
    match index {
        config::MANUFACTURER_STRING_INDEX => Some(&MANUFACTURER_NAME_DESCRIPTOR),
        config::PRODUCT_STRING_INDEX => Some(&PRODUCT_NAME_DESCRIPTOR),
        _ => None,
    }
}
