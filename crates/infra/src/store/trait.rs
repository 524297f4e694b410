use std::sync::Arc;

use productkit_core::CatalogResult;

/// Keyed record storage behind the in-memory loaders.
///
/// Predicates and factories are taken as trait objects so the trait stays
/// object safe and can be shared behind `Arc<dyn RecordStore<..>>`.
pub trait RecordStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> CatalogResult<Option<V>>;
    fn contains(&self, key: &K) -> CatalogResult<bool>;
    /// Insert or replace. A replaced record keeps its original position.
    fn insert(&self, key: K, value: V) -> CatalogResult<()>;
    /// First record (in insertion order) matching `predicate`.
    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> CatalogResult<Option<V>>;
    fn filter(&self, predicate: &dyn Fn(&V) -> bool) -> CatalogResult<Vec<V>>;
    fn list(&self) -> CatalogResult<Vec<V>>;
    fn len(&self) -> CatalogResult<usize>;

    /// Atomically return the first record matching `predicate`, or insert the
    /// one produced by `make`. The flag is `true` when a record was inserted.
    fn find_or_insert_with(
        &self,
        predicate: &dyn Fn(&V) -> bool,
        make: &dyn Fn() -> (K, V),
    ) -> CatalogResult<(V, bool)>;
}

impl<K, V, S> RecordStore<K, V> for Arc<S>
where
    S: RecordStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> CatalogResult<Option<V>> {
        (**self).get(key)
    }

    fn contains(&self, key: &K) -> CatalogResult<bool> {
        (**self).contains(key)
    }

    fn insert(&self, key: K, value: V) -> CatalogResult<()> {
        (**self).insert(key, value)
    }

    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> CatalogResult<Option<V>> {
        (**self).find(predicate)
    }

    fn filter(&self, predicate: &dyn Fn(&V) -> bool) -> CatalogResult<Vec<V>> {
        (**self).filter(predicate)
    }

    fn list(&self) -> CatalogResult<Vec<V>> {
        (**self).list()
    }

    fn len(&self) -> CatalogResult<usize> {
        (**self).len()
    }

    fn find_or_insert_with(
        &self,
        predicate: &dyn Fn(&V) -> bool,
        make: &dyn Fn() -> (K, V),
    ) -> CatalogResult<(V, bool)> {
        (**self).find_or_insert_with(predicate, make)
    }
}
