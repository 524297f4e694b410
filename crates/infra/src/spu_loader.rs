//! In-memory `SpuLoader`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use productkit_core::{CatalogError, Entity, SpuId};
use productkit_products::{NewSpu, SpuLoader};

use crate::config::SpuMatchPolicy;
use crate::records::SpuRecord;
use crate::store::{InMemoryRecordStore, RecordStore};

pub type SpuStore = InMemoryRecordStore<SpuId, SpuRecord>;

impl SpuMatchPolicy {
    /// Whether `record` satisfies a find-or-create request for `attrs`.
    pub fn matches(self, record: &SpuRecord, attrs: &NewSpu) -> bool {
        match self {
            SpuMatchPolicy::Gtin => record.gtin == attrs.gtin,
            SpuMatchPolicy::GtinAndTitle => {
                record.gtin == attrs.gtin && record.title == attrs.title
            }
        }
    }
}

/// SPU loader over a [`RecordStore`].
///
/// Identifiers resolve by SPU id first, then by GTIN (first created wins).
#[derive(Debug, Clone)]
pub struct InMemorySpuLoader<S = Arc<SpuStore>>
where
    S: RecordStore<SpuId, SpuRecord>,
{
    store: S,
    policy: SpuMatchPolicy,
}

impl<S> InMemorySpuLoader<S>
where
    S: RecordStore<SpuId, SpuRecord>,
{
    pub fn new(store: S, policy: SpuMatchPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> SpuMatchPolicy {
        self.policy
    }

    /// All SPUs in creation order.
    pub fn list_spus(&self) -> Result<Vec<SpuRecord>, CatalogError> {
        self.store.list()
    }

    pub fn spu_count(&self) -> Result<usize, CatalogError> {
        self.store.len()
    }

    fn new_record(attrs: NewSpu) -> SpuRecord {
        SpuRecord::new(SpuId::new(), attrs, Utc::now())
    }
}

impl<S> SpuLoader for InMemorySpuLoader<S>
where
    S: RecordStore<SpuId, SpuRecord>,
{
    type Spu = SpuRecord;
    type Error = CatalogError;

    fn load_spu_by_identifier(&self, identifier: &str) -> Result<Option<SpuRecord>, CatalogError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            debug!("blank spu identifier");
            return Ok(None);
        }

        if let Ok(id) = identifier.parse::<SpuId>() {
            if let Some(spu) = self.store.get(&id)? {
                return Ok(Some(spu));
            }
        }

        let found = self
            .store
            .find(&|spu: &SpuRecord| spu.gtin.as_deref() == Some(identifier))?;
        if found.is_none() {
            debug!(identifier, "spu not found");
        }
        Ok(found)
    }

    fn create_spu(&self, attrs: NewSpu) -> Result<SpuRecord, CatalogError> {
        let record = Self::new_record(attrs);
        self.store.insert(*record.entity_id(), record.clone())?;
        info!(spu_id = %record.id, gtin = ?record.gtin, "spu created");
        Ok(record)
    }

    fn load_or_create_spu(&self, attrs: NewSpu) -> Result<SpuRecord, CatalogError> {
        let policy = self.policy;
        let (record, created) = self.store.find_or_insert_with(
            &|spu: &SpuRecord| policy.matches(spu, &attrs),
            &|| {
                let record = Self::new_record(attrs.clone());
                (*record.entity_id(), record)
            },
        )?;

        if created {
            info!(spu_id = %record.id, gtin = ?record.gtin, %policy, "spu created");
        } else {
            debug!(spu_id = %record.id, gtin = ?record.gtin, %policy, "existing spu matched");
        }
        Ok(record)
    }
}
