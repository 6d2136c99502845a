//! HTTP client module with status classification and error mapping.

mod client;
mod status;

pub use client::HttpClient;
pub use status::{check_status, status_hint};
