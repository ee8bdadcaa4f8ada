//! # Repticare Core
//!
//! Core library for Repticare - a local, append-only husbandry log for reptiles
//! (feeding, toilet, bathing and vet visits).
//!
//! This crate provides the data model, persistence adapters, the record store
//! and the statistics computation, independent of any presentation layer.
//!
//! ## Architecture
//!
//! - **storage**: Persistence trait, data types, in-memory and file adapters
//! - **store**: The `Store` that owns reptiles and entries
//! - **stats**: Per-reptile aggregate statistics
//! - **clock**: Time source used to stamp new entries

pub mod clock;
pub mod error;
pub mod fs;
pub mod stats;
pub mod storage;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use error::{RepticareError, Result};
pub use stats::{compute_stats, PerTypeStats, Stats, TypeStats};
pub use storage::{
    CollectionKey, Entry, EntryId, EntryType, FilePersistence, MemoryPersistence, Persistence,
    Reptile, ReptileId,
};
pub use store::Store;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
