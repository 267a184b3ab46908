//! Shared types and configuration for Tessera.
//!
//! This crate provides common building blocks used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The decimal policy governing every monetary computation
//! - Configuration management

pub mod config;
pub mod types;

pub use config::LedgerConfig;
pub use types::{DecimalPolicy, RoundingMode};
