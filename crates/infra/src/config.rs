//! Configuration loading and representation.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the [`SpuMatchPolicy`].
pub const SPU_MATCH_POLICY_ENV: &str = "PRODUCTKIT_SPU_MATCH_POLICY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Attributes compared by `load_or_create_spu` when looking for an existing SPU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpuMatchPolicy {
    /// GTIN equality only. Two absent GTINs are equal.
    #[default]
    Gtin,
    /// GTIN and title must both be equal.
    #[serde(rename = "gtin_title")]
    GtinAndTitle,
}

impl SpuMatchPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            SpuMatchPolicy::Gtin => "gtin",
            SpuMatchPolicy::GtinAndTitle => "gtin_title",
        }
    }
}

impl core::fmt::Display for SpuMatchPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpuMatchPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gtin" => Ok(SpuMatchPolicy::Gtin),
            "gtin_title" => Ok(SpuMatchPolicy::GtinAndTitle),
            _ => Err(ConfigError::InvalidValue {
                var: SPU_MATCH_POLICY_ENV,
                value: s.to_string(),
            }),
        }
    }
}

/// Runtime configuration of the in-memory catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub spu_match_policy: SpuMatchPolicy,
}

impl CatalogConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SPU_MATCH_POLICY_ENV) {
            config.spu_match_policy = raw.parse()?;
        }

        Ok(config)
    }
}
