//! HTTP client layer for hosting-platform API access

pub mod client;

pub use client::GitHubApiClient;
