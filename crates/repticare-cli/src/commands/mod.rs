//! Command handlers, one module per command group.

pub mod entries;
pub mod misc;
pub mod reptiles;
pub mod stats;
