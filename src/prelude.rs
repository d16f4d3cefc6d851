//! Prelude module for zodiac_sign crate.
//!
//! Re-exports the derive macros from derive_more used across the crate.

pub use derive_more::Display;
