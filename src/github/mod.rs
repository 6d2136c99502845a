//! GitHub release-listing API.

mod client;
mod types;

pub use client::{GitHub, ListReleases};
#[cfg(test)]
pub use client::MockListReleases;
pub use types::{Release, ReleaseAsset};
