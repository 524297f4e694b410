//! Stock keeping unit contract.

use std::sync::Arc;

/// A sellable variant of a SPU, carrying its own identity and trade attributes.
pub trait Sku {
    /// Stable identity of this SKU. Never empty.
    fn id(&self) -> String;

    /// Global Trade Item Number.
    fn gtin(&self) -> Option<&str>;

    /// Manufacturer part number.
    fn mpn(&self) -> Option<&str>;

    /// Free-text note.
    fn remark(&self) -> Option<&str>;

    /// Tri-state validity: `Some(true)` valid, `Some(false)` invalid, `None` unknown.
    fn is_valid(&self) -> Option<bool>;
}

macro_rules! forward_sku {
    ($($ptr:ty),*) => {
        $(
            impl<T: Sku + ?Sized> Sku for $ptr {
                fn id(&self) -> String {
                    (**self).id()
                }

                fn gtin(&self) -> Option<&str> {
                    (**self).gtin()
                }

                fn mpn(&self) -> Option<&str> {
                    (**self).mpn()
                }

                fn remark(&self) -> Option<&str> {
                    (**self).remark()
                }

                fn is_valid(&self) -> Option<bool> {
                    (**self).is_valid()
                }
            }
        )*
    };
}

forward_sku!(&T, Box<T>, Arc<T>);
