//! Release selection.
//!
//! Pure functions over the listing returned by the API: pick the newest
//! compatible release, then the one asset that matches the naming template.

mod asset;
mod version;

pub use asset::AssetResolver;
pub use version::VersionSelector;
