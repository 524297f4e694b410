//! Concrete SPU/SKU records held by the in-memory catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use productkit_core::{Entity, SkuId, SpuId};
use productkit_products::{NewSku, NewSpu, Sku, Spu};

/// Stored SPU.
///
/// Keeps `title`, `remark` and `valid` from the creation attributes even though
/// the `Spu` contract only exposes the GTIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpuRecord {
    pub id: SpuId,
    pub gtin: Option<String>,
    pub title: Option<String>,
    pub remark: Option<String>,
    pub valid: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl SpuRecord {
    pub fn new(id: SpuId, attrs: NewSpu, created_at: DateTime<Utc>) -> Self {
        let NewSpu {
            gtin,
            title,
            remark,
            valid,
        } = attrs;
        Self {
            id,
            gtin,
            title,
            remark,
            valid,
            created_at,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn remark(&self) -> Option<&str> {
        self.remark.as_deref()
    }

    pub fn is_valid(&self) -> Option<bool> {
        self.valid
    }
}

impl Spu for SpuRecord {
    fn gtin(&self) -> Option<&str> {
        self.gtin.as_deref()
    }
}

impl Entity for SpuRecord {
    type Id = SpuId;

    fn entity_id(&self) -> &SpuId {
        &self.id
    }
}

/// Stored SKU, linked to its parent SPU by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuRecord {
    pub id: SkuId,
    pub spu_id: SpuId,
    pub gtin: Option<String>,
    pub mpn: Option<String>,
    pub remark: Option<String>,
    pub valid: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl SkuRecord {
    pub fn new(id: SkuId, spu_id: SpuId, attrs: NewSku, created_at: DateTime<Utc>) -> Self {
        let NewSku {
            gtin,
            mpn,
            remark,
            valid,
        } = attrs;
        Self {
            id,
            spu_id,
            gtin,
            mpn,
            remark,
            valid,
            created_at,
        }
    }
}

impl Sku for SkuRecord {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn gtin(&self) -> Option<&str> {
        self.gtin.as_deref()
    }

    fn mpn(&self) -> Option<&str> {
        self.mpn.as_deref()
    }

    fn remark(&self) -> Option<&str> {
        self.remark.as_deref()
    }

    fn is_valid(&self) -> Option<bool> {
        self.valid
    }
}

impl Entity for SkuRecord {
    type Id = SkuId;

    fn entity_id(&self) -> &SkuId {
        &self.id
    }
}
