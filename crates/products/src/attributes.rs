//! Attribute bundles accepted by the loader factories.
//!
//! Both bundles default every optional string to absent and `valid` to
//! `Some(true)`. Missing fields take the same defaults when deserialized.

use serde::{Deserialize, Serialize};

/// Attributes for creating (or finding) a SPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSpu {
    pub gtin: Option<String>,
    pub title: Option<String>,
    pub remark: Option<String>,
    pub valid: Option<bool>,
}

impl Default for NewSpu {
    fn default() -> Self {
        Self {
            gtin: None,
            title: None,
            remark: None,
            valid: Some(true),
        }
    }
}

impl NewSpu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gtin(mut self, gtin: impl Into<String>) -> Self {
        self.gtin = Some(gtin.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    /// Accepts `true`, `false` or `None` (unknown).
    pub fn with_valid(mut self, valid: impl Into<Option<bool>>) -> Self {
        self.valid = valid.into();
        self
    }
}

/// Attributes for creating a SKU under a SPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSku {
    pub gtin: Option<String>,
    pub mpn: Option<String>,
    pub remark: Option<String>,
    pub valid: Option<bool>,
}

impl Default for NewSku {
    fn default() -> Self {
        Self {
            gtin: None,
            mpn: None,
            remark: None,
            valid: Some(true),
        }
    }
}

impl NewSku {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gtin(mut self, gtin: impl Into<String>) -> Self {
        self.gtin = Some(gtin.into());
        self
    }

    pub fn with_mpn(mut self, mpn: impl Into<String>) -> Self {
        self.mpn = Some(mpn.into());
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    /// Accepts `true`, `false` or `None` (unknown).
    pub fn with_valid(mut self, valid: impl Into<Option<bool>>) -> Self {
        self.valid = valid.into();
        self
    }
}
