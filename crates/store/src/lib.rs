//! Store backends for StyleCast.
//!
//! Both implement `stylecast_core::KeyValueStore`: the daily outfit cache
//! injects one and never knows which.

pub mod file;
pub mod in_memory;

pub use file::FileStore;
pub use in_memory::InMemoryStore;
