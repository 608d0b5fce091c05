//! Application pages.

pub mod browser;
pub mod viewer;
