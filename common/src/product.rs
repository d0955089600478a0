use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique catalog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level product grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fashion,
    Food,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Fashion => write!(f, "Fashion"),
            Category::Food => write!(f, "Food"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubCategory {
    Watch,
    Earring,
    Bakery,
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubCategory::Watch => write!(f, "Watch"),
            SubCategory::Earring => write!(f, "Earring"),
            SubCategory::Bakery => write!(f, "Bakery"),
        }
    }
}

/// Quality grade shown on fashion items. Carries no pricing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Premium,
    #[serde(rename = "Mid-range")]
    MidRange,
    Budget,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Premium => "Premium",
            Tier::MidRange => "Mid-range",
            Tier::Budget => "Budget",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub user: String,
    /// Whole stars, 0–5.
    pub rating: u8,
    pub comment: String,
    /// Display label such as "2 days ago". Never parsed.
    pub date: String,
}

impl Review {
    /// Filled/unfilled flag for each of the five stars.
    pub fn stars(&self) -> [bool; 5] {
        std::array::from_fn(|i| i < self.rating as usize)
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub sub_category: SubCategory,
    /// Whole rupees.
    pub price: u64,
    /// Average rating, 0.0–5.0.
    pub rating: f32,
    pub image: String,
    pub description: String,
    pub is_perishable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub specifications: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Case-insensitive substring match over name and description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
