//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`plate`, `selection`, `animation`, `query`) so
//! individual components can depend on small focused models. Selectors and
//! other DOM surfaces are views over this state, never the canonical store.

pub mod animation;
pub mod plate;
pub mod query;
pub mod selection;
