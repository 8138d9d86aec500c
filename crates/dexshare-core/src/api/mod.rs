//! Client module for the Dexcom Share web services.
//!
//! `ShareClient` logs in with an account name and password (account id lookup,
//! then session authentication) and reads the latest glucose values with the
//! resulting session id. All calls are JSON POSTs through a [`Transport`].

pub mod client;
pub mod error;
pub mod transport;

pub use client::ShareClient;
pub use error::{Result, ShareError};
pub use transport::{HttpTransport, Transport};
