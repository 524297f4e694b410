//! Shared-storage wiring of the in-memory loaders.

use std::sync::Arc;

use crate::config::{CatalogConfig, ConfigError};
use crate::sku_loader::{InMemorySkuLoader, SkuStore};
use crate::spu_loader::{InMemorySpuLoader, SpuStore};

/// Owns the SPU and SKU stores; loaders handed out share them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    spus: Arc<SpuStore>,
    skus: Arc<SkuStore>,
    config: CatalogConfig,
}

impl InMemoryCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            spus: Arc::new(SpuStore::new()),
            skus: Arc::new(SkuStore::new()),
            config,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let config = CatalogConfig::from_env()?;
        tracing::info!(spu_match_policy = %config.spu_match_policy, "in-memory catalog configured");
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn spu_loader(&self) -> InMemorySpuLoader {
        InMemorySpuLoader::new(self.spus.clone(), self.config.spu_match_policy)
    }

    pub fn sku_loader(&self) -> InMemorySkuLoader {
        InMemorySkuLoader::new(self.spus.clone(), self.skus.clone())
    }
}
