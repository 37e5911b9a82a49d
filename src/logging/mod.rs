//! Structured logging with decode context.
//!
//! Provides the `[shape=...]` prefix used by boundary log lines for easy
//! correlation.

pub mod structured;

pub use structured::*;
