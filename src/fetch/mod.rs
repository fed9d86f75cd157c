//! Fetch layer for retrieving bang lists from remote sources.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Fetching and validating bang lists ([`ConfigFetcher`], [`HttpConfigFetcher`])

mod client;
mod error;
mod fetcher;
mod http;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{FetchError, HttpError};
pub use fetcher::{ConfigFetcher, HttpConfigFetcher};
pub use http::{HttpClient, HttpRequest, HttpResponse};
