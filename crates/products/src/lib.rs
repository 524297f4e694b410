//! Product service contracts.
//!
//! This crate defines the capability traits of the catalog: the `Spu` (generic
//! product) and `Sku` (sellable variant) accessors, and the `SpuLoader` /
//! `SkuLoader` factories that find or create them. It holds no storage; see
//! `productkit-infra` for an in-memory implementation.

pub mod attributes;
pub mod loader;
pub mod sku;
pub mod spu;

pub use attributes::{NewSku, NewSpu};
pub use loader::{SkuLoader, SpuLoader};
pub use sku::Sku;
pub use spu::Spu;
