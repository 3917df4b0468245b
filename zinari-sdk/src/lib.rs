//! SDK for the ZinariPay payment gateway.
//!
//! [`objects`] holds the request and response types exchanged with the API,
//! [`config`] the transport settings, and [`client`] (behind the default
//! `client` feature) the typed HTTP client.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;

#[cfg(feature = "client")]
pub use client::{ClientError, ZinariClient};
pub use config::{ClientConfig, TransportConfig};
