//! Authentication state for the share service.
//!
//! This module provides:
//! - `Credentials`: account name and password, fixed for a client's lifetime
//! - `LoginState`: account id and session id as they are resolved
//!
//! Sessions are never refreshed; a rejected session surfaces as an error.

pub mod credentials;
pub mod session;

pub use credentials::Credentials;
pub use session::{AccountId, LoginState, SessionId};
