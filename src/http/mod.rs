//! HTTP client layer — `HttpClient` with normalized errors.

pub mod client;

pub use client::HttpClient;
