//! `productkit-core` — shared catalog building blocks.
//!
//! Typed identifiers, the catalog error model and the `Entity` trait. No storage
//! or IO lives here.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::{SkuId, SpuId};
