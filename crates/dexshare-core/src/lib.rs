//! # dexshare-core
//!
//! Client for the Dexcom Share service, which relays a monitored user's
//! continuous glucose monitor readings to followers.
//!
//! Reading data takes three calls: the account name and password are exchanged
//! for an account id, the account id and password for a session id, and the
//! session id for the latest readings. [`ShareClient`] performs the first two
//! lazily and keeps the results for the life of the instance.
//!
//! ```no_run
//! use dexshare_core::ShareClient;
//!
//! # async fn run() -> dexshare_core::Result<()> {
//! let mut client = ShareClient::new("follower@example.com", "password")?;
//! for reading in client.get_readings(60, 12).await? {
//!     println!("{} {} {}", reading.timestamp, reading.value, reading.trend);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{HttpTransport, Result, ShareClient, ShareError, Transport};
pub use auth::Credentials;
pub use config::{Region, ShareConfig};
pub use models::GlucoseReading;
