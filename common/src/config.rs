use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::currency::Grouping;
use crate::error::ConfigError;

/// Which homepage shell wraps the shared catalog and cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeLayout {
    /// Banner, category chips and product grid.
    #[default]
    Catalog,
    /// Track-record variant: stats and portfolio ahead of the grid.
    Portfolio,
}

impl FromStr for HomeLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "catalog" => Ok(HomeLayout::Catalog),
            "portfolio" => Ok(HomeLayout::Portfolio),
            other => Err(ConfigError::UnknownLayout(other.to_string())),
        }
    }
}

impl fmt::Display for HomeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeLayout::Catalog => write!(f, "catalog"),
            HomeLayout::Portfolio => write!(f, "portfolio"),
        }
    }
}

/// Storefront settings. Every field has a default so partial files load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Search box quiet period in milliseconds.
    pub search_quiet_ms: u64,
    pub home_layout: HomeLayout,
    pub grouping: Grouping,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            search_quiet_ms: 400,
            home_layout: HomeLayout::Catalog,
            grouping: Grouping::International,
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn search_quiet_period(&self) -> Duration {
        Duration::from_millis(self.search_quiet_ms)
    }
}
