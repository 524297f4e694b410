//! Keyed record storage for the in-memory catalog.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use r#trait::RecordStore;
