//! Infrastructure layer: in-memory catalog storage, loaders and config.

pub mod catalog;
pub mod config;
pub mod records;
pub mod sku_loader;
pub mod spu_loader;
pub mod store;


pub use catalog::InMemoryCatalog;
pub use config::{CatalogConfig, ConfigError, SpuMatchPolicy};
pub use records::{SkuRecord, SpuRecord};
pub use sku_loader::{InMemorySkuLoader, SkuStore};
pub use spu_loader::{InMemorySpuLoader, SpuStore};
pub use store::{InMemoryRecordStore, RecordStore};
