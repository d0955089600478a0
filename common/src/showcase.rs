use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

const BUILTIN_SHOWCASE: &str = include_str!("../data/showcase.json");

/// A headline figure on the track-record homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    /// Pre-formatted display value such as "15,000+".
    pub value: String,
    /// Icon name the renderer maps to a glyph.
    pub icon: String,
}

/// A past sale or event highlighted on the track-record homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tag: String,
    pub stats: String,
}

/// Static marketing content shown alongside the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showcase {
    #[serde(default)]
    pub stats: Vec<StatItem>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
}

impl Showcase {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_SHOWCASE).expect("bundled showcase should be valid")
    }
}
