//! REST plumbing: wire types, API helpers, and image-merge URL
//! composition.

pub mod api;
pub mod types;
pub mod urls;
