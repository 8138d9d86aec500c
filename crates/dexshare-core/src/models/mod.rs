pub mod reading;

pub use reading::{GlucoseReading, RawReading};
pub(crate) use reading::{AccountLookupRequest, ReadingsRequest, SessionRequest};
