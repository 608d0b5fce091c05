//! Browser-side utilities.

#[cfg(feature = "hydrate")]
pub mod openseadragon;
