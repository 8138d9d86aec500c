//! Helpers for vendor-specific encodings.

pub mod timestamp;

pub use timestamp::{format_vendor_timestamp, parse_vendor_timestamp};
