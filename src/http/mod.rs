//! HTTP layer
//!
//! Provides a GraphQL-over-HTTPS client with a persistent connection pool
//! and a request pacer for rate-limit compliance.
//!
//! # Features
//!
//! - **Connection reuse**: one `reqwest::Client` shared across all pages
//! - **Fixed headers**: JSON content type and accept on every request
//! - **Request pacing**: minimum inter-request interval using governor

mod client;
mod rate_limit;

pub use client::{GraphqlClient, GraphqlClientConfig};
pub use rate_limit::RequestPacer;
