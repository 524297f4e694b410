use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;

use productkit_core::{CatalogError, CatalogResult};

use super::r#trait::RecordStore;

#[derive(Debug)]
struct Records<K, V> {
    by_key: HashMap<K, V>,
    // Insertion order; scans walk this so lookups are deterministic.
    order: Vec<K>,
}

impl<K, V> Records<K, V>
where
    K: Eq + Hash,
{
    fn iter(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|k| self.by_key.get(k))
    }
}

/// In-memory record store for tests/dev.
#[derive(Debug)]
pub struct InMemoryRecordStore<K, V> {
    inner: RwLock<Records<K, V>>,
}

impl<K, V> InMemoryRecordStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Records {
                by_key: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }
}

impl<K, V> Default for InMemoryRecordStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> CatalogError {
    CatalogError::storage("lock poisoned")
}

impl<K, V> RecordStore<K, V> for InMemoryRecordStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> CatalogResult<Option<V>> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.by_key.get(key).cloned())
    }

    fn contains(&self, key: &K) -> CatalogResult<bool> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.by_key.contains_key(key))
    }

    fn insert(&self, key: K, value: V) -> CatalogResult<()> {
        let mut records = self.inner.write().map_err(|_| poisoned())?;
        if records.by_key.insert(key.clone(), value).is_none() {
            records.order.push(key);
        }
        Ok(())
    }

    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> CatalogResult<Option<V>> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.iter().find(|v| predicate(*v)).cloned())
    }

    fn filter(&self, predicate: &dyn Fn(&V) -> bool) -> CatalogResult<Vec<V>> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.iter().filter(|v| predicate(*v)).cloned().collect())
    }

    fn list(&self) -> CatalogResult<Vec<V>> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.iter().cloned().collect())
    }

    fn len(&self) -> CatalogResult<usize> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.by_key.len())
    }

    fn find_or_insert_with(
        &self,
        predicate: &dyn Fn(&V) -> bool,
        make: &dyn Fn() -> (K, V),
    ) -> CatalogResult<(V, bool)> {
        let mut records = self.inner.write().map_err(|_| poisoned())?;
        if let Some(existing) = records.iter().find(|v| predicate(*v)) {
            return Ok((existing.clone(), false));
        }

        let (key, value) = make();
        if records.by_key.insert(key.clone(), value.clone()).is_none() {
            records.order.push(key);
        }
        Ok((value, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn list_follows_insertion_order() {
        let store = InMemoryRecordStore::new();
        store.insert(3, "c").unwrap();
        store.insert(1, "a").unwrap();
        store.insert(2, "b").unwrap();
        assert_eq!(store.list().unwrap(), vec!["c", "a", "b"]);
    }

    #[test]
    fn replacing_keeps_position_and_len() {
        let store = InMemoryRecordStore::new();
        store.insert("x", 1).unwrap();
        store.insert("y", 2).unwrap();
        store.insert("x", 10).unwrap();
        assert_eq!(store.list().unwrap(), vec![10, 2]);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn find_returns_first_match() {
        let store = InMemoryRecordStore::new();
        store.insert(1, "apple").unwrap();
        store.insert(2, "avocado").unwrap();
        let found = store.find(&|v: &&str| v.starts_with('a')).unwrap();
        assert_eq!(found, Some("apple"));
        assert_eq!(store.find(&|v: &&str| v.is_empty()).unwrap(), None);
    }

    #[test]
    fn find_or_insert_with_only_inserts_once() {
        let store = InMemoryRecordStore::new();
        let (first, inserted) = store
            .find_or_insert_with(&|v: &u32| *v == 7, &|| ("seven", 7))
            .unwrap();
        assert_eq!((first, inserted), (7, true));

        let (second, inserted) = store
            .find_or_insert_with(&|v: &u32| *v == 7, &|| ("other", 7))
            .unwrap();
        assert_eq!((second, inserted), (7, false));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn shared_through_arc() {
        let store: Arc<InMemoryRecordStore<u8, u8>> = Arc::new(InMemoryRecordStore::new());
        let handle = store.clone();
        handle.insert(1, 42).unwrap();
        assert!(store.contains(&1).unwrap());
        assert_eq!(RecordStore::get(&store, &1).unwrap(), Some(42));
    }
}
