//! Client-side bindings for the swimming analytics API.
//!
//! The analytics engine computes stability, trend and PB freshness upstream;
//! this crate only describes its payloads and fetches them.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::AnalyticsClient;
pub use config::ApiConfig;
pub use error::FetchError;
