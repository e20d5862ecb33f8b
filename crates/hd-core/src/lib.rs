//! # hd-core
//!
//! Core types and error definitions for helpdesk-rs.
//!
//! This crate provides the building blocks shared across the workspace: the
//! error hierarchy, resolver settings, and string parsers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Resolver settings (supported years, collision policy).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{CollisionPolicy, ResolverSettings};
