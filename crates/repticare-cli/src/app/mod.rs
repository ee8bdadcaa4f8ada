//! Application-level utilities for the Repticare CLI.
//!
//! This module provides:
//! - Path resolution for config and data directory
//! - Reptile selection when `--reptile` is omitted
//! - The per-invocation application context

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::select_reptile;
