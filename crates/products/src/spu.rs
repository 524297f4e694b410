//! Standard product unit contract.

use std::sync::Arc;

/// A generic product, independent of variant-specific attributes.
///
/// The contract carries no identity; lookup by identifier is the job of a
/// [`SpuLoader`](crate::SpuLoader).
pub trait Spu {
    /// Global Trade Item Number, or `None` when unknown / not assigned.
    fn gtin(&self) -> Option<&str>;
}

impl<T: Spu + ?Sized> Spu for &T {
    fn gtin(&self) -> Option<&str> {
        (**self).gtin()
    }
}

impl<T: Spu + ?Sized> Spu for Box<T> {
    fn gtin(&self) -> Option<&str> {
        (**self).gtin()
    }
}

impl<T: Spu + ?Sized> Spu for Arc<T> {
    fn gtin(&self) -> Option<&str> {
        (**self).gtin()
    }
}
