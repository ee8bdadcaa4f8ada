//! Storage layer: data types, the persistence trait and its adapters.

mod file;
mod memory;
mod traits;
mod types;

pub use file::FilePersistence;
pub use memory::MemoryPersistence;
pub use traits::{CollectionKey, Persistence};
pub use types::{Entry, EntryId, EntryType, Reptile, ReptileId};
