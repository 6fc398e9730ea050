//! Client for the Have I Been Pwned v3 breached account API.
//!
//! The client issues a single request per lookup and never retries; every upstream
//! failure is surfaced to the caller as a distinct [`Error`] variant so services can
//! decide which failures are fatal. A `404` from the API means the account has no known
//! breaches and is reported as [`Error::NotFound`].
//!
//! ```no_run
//! # async fn example() -> Result<(), hibp_client::Error> {
//! let client = hibp_client::Client::builder()
//!     .api_key("my-api-key")
//!     .user_agent("Osint Cyber")
//!     .build()?;
//!
//! let breaches = client.breached_account("alice@example.com").await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder, API_KEY_HEADER, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use config::{Config, ConfigBuilder};
pub use error::Error;
