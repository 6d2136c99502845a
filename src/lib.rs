//! Fetch the newest Hamlib 4.x Windows build from GitHub releases and unpack
//! it under a fixed, version-independent directory name.

pub mod archive;
pub mod config;
pub mod download;
pub mod error;
pub mod fetch;
pub mod github;
pub mod http;
pub mod normalize;
pub mod release;
pub mod runtime;

pub use config::FetchConfig;
pub use error::FetchError;
pub use fetch::{FetchOutcome, Fetcher};
