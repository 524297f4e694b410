//! In-memory `SkuLoader`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use productkit_core::{CatalogError, Entity, SkuId, SpuId};
use productkit_products::{NewSku, SkuLoader};

use crate::records::{SkuRecord, SpuRecord};
use crate::spu_loader::SpuStore;
use crate::store::{InMemoryRecordStore, RecordStore};

pub type SkuStore = InMemoryRecordStore<SkuId, SkuRecord>;

/// SKU loader over a [`RecordStore`].
///
/// Reads the SPU store only to check that a parent SPU exists; identifiers
/// resolve by SKU id alone.
#[derive(Debug, Clone)]
pub struct InMemorySkuLoader<P = Arc<SpuStore>, S = Arc<SkuStore>>
where
    P: RecordStore<SpuId, SpuRecord>,
    S: RecordStore<SkuId, SkuRecord>,
{
    spus: P,
    skus: S,
}

impl<P, S> InMemorySkuLoader<P, S>
where
    P: RecordStore<SpuId, SpuRecord>,
    S: RecordStore<SkuId, SkuRecord>,
{
    pub fn new(spus: P, skus: S) -> Self {
        Self { spus, skus }
    }

    /// SKUs created under `spu_id`, in creation order.
    pub fn list_skus_for_spu(&self, spu_id: &SpuId) -> Result<Vec<SkuRecord>, CatalogError> {
        self.skus.filter(&|sku: &SkuRecord| sku.spu_id == *spu_id)
    }

    pub fn sku_count(&self) -> Result<usize, CatalogError> {
        self.skus.len()
    }
}

impl<P, S> SkuLoader for InMemorySkuLoader<P, S>
where
    P: RecordStore<SpuId, SpuRecord>,
    S: RecordStore<SkuId, SkuRecord>,
{
    type Spu = SpuRecord;
    type Sku = SkuRecord;
    type Error = CatalogError;

    fn load_sku_by_identifier(&self, identifier: &str) -> Result<Option<SkuRecord>, CatalogError> {
        let id = match identifier.parse::<SkuId>() {
            Ok(id) => id,
            Err(e) => {
                debug!(identifier, error = %e, "sku identifier is not a sku id");
                return Ok(None);
            }
        };

        let found = self.skus.get(&id)?;
        if found.is_none() {
            debug!(sku_id = %id, "sku not found");
        }
        Ok(found)
    }

    fn create_sku(&self, spu: &SpuRecord, attrs: NewSku) -> Result<SkuRecord, CatalogError> {
        if !self.spus.contains(spu.entity_id())? {
            warn!(spu_id = %spu.id, "rejecting sku for spu outside this catalog");
            return Err(CatalogError::unknown_spu(spu.id.to_string()));
        }

        let record = SkuRecord::new(SkuId::new(), spu.id, attrs, Utc::now());
        self.skus.insert(*record.entity_id(), record.clone())?;
        info!(
            sku_id = %record.id,
            spu_id = %record.spu_id,
            gtin = ?record.gtin,
            mpn = ?record.mpn,
            "sku created"
        );
        Ok(record)
    }
}
