//! pasc version information.
//!
//! This module exposes the frontend version as a single constant so all
//! subsystems agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The pasc version string (for example, `0.1.0-alpha.1`).
pub const PASC_VERSION: &str = env!("CARGO_PKG_VERSION");
