//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog records expose their typed identifier through this trait; the
/// contract traits in `productkit-products` only see the string form.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn entity_id(&self) -> &Self::Id;
}
