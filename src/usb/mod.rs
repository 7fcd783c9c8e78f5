//! USB-facing constants - the string descriptor table.
//!
//! The device's USB stack answers `GET_DESCRIPTOR(STRING, index)` by
//! copying one of the records in [`strings`] onto the wire verbatim.
//! Nothing here runs at runtime; it is read-only data shaped exactly
//! as the bus requires, safe to read from any interrupt or polling
//! context without coordination.

pub mod strings;
