//! USB device-identity strings for the VuRack MIDI controller.
//!
//! The VuRack enumerates as a USB MIDI device; the host identifies it by
//! the product and manufacturer string descriptors defined here.  This
//! crate owns exactly that data: two immutable records in the bit-exact
//! layout USB requires, ready for the external USB stack to copy onto
//! the wire during `GET_DESCRIPTOR` requests.
//!
//! Enumeration, descriptor negotiation, and the MIDI streaming class all
//! live in the USB stack itself - this crate only supplies constants.
//!
//! The descriptor length field is derived from the string at compile
//! time, so a name edited without its declared character count (or vice
//! versa) fails the build instead of corrupting enumeration.
//!
//! Usage: `cargo test` runs all checks on the host; no hardware needed.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod descriptor;
pub mod error;
pub mod usb;

pub use descriptor::{StringDescriptor, DESCRIPTOR_TYPE_STRING};
pub use error::Error;
pub use usb::strings::{
    string_descriptor, MANUFACTURER_NAME, MANUFACTURER_NAME_DESCRIPTOR, PRODUCT_NAME,
    PRODUCT_NAME_DESCRIPTOR,
};
