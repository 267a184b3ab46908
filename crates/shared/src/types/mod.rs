//! Common types used across the engine.

pub mod id;
pub mod policy;

pub use id::*;
pub use policy::{DecimalPolicy, RoundingMode};
