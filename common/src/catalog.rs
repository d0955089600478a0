use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::debounce::{Debounce, Ticket, DEFAULT_QUIET_PERIOD};
use crate::error::CatalogError;
use crate::product::{Category, Product, ProductId};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Category selector value. `All` is a wildcard, not a product category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Fashion,
    Food,
}

impl CategoryFilter {
    pub fn all() -> &'static [CategoryFilter] {
        &[CategoryFilter::All, CategoryFilter::Fashion, CategoryFilter::Food]
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Fashion => category == Category::Fashion,
            CategoryFilter::Food => category == Category::Food,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Fashion => CategoryFilter::Fashion,
            Category::Food => CategoryFilter::Food,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Fashion => write!(f, "Fashion"),
            CategoryFilter::Food => write!(f, "Food"),
        }
    }
}

/// Products matching both `category` and `query`, in source order.
///
/// The query matches case-insensitively against name or description; an
/// empty query matches everything.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(p.category) && p.matches_lowercase(&needle))
        .collect()
}

/// The immutable product list for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range ratings.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: product.id,
                    rating: product.rating,
                });
            }
            if let Some(review) = product.reviews.iter().find(|r| r.rating > 5) {
                return Err(CatalogError::ReviewRatingOutOfRange {
                    id: product.id,
                    review: review.id,
                    rating: review.rating,
                });
            }
        }
        Ok(Self { products })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The storefront's bundled mock catalog.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG).expect("bundled catalog should be valid")
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, category: CategoryFilter, query: &str) -> Vec<&Product> {
        filter_products(&self.products, category, query)
    }
}

/// Category selection plus debounced search text.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    pub category: CategoryFilter,
    query: Debounce<String>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl CatalogFilter {
    pub fn new(quiet: Duration) -> Self {
        Self {
            category: CategoryFilter::All,
            query: Debounce::new(String::new(), quiet),
        }
    }

    /// Text currently in the search box.
    pub fn raw_query(&self) -> &str {
        self.query.raw()
    }

    /// Text the filter is actually applying.
    pub fn query(&self) -> &str {
        self.query.value()
    }

    pub fn quiet_period(&self) -> Duration {
        self.query.quiet_period()
    }

    pub fn type_query(&mut self, text: impl Into<String>, now: Duration) -> Ticket {
        self.query.push(text.into(), now)
    }

    pub fn poll_query(&mut self, now: Duration) -> bool {
        self.query.poll(now)
    }

    pub fn settle_query(&mut self, ticket: Ticket) -> bool {
        self.query.fire(ticket)
    }

    pub fn clear_query(&mut self) {
        self.query.reset(String::new());
    }

    /// Whether a category or search restriction is in effect. An empty
    /// result with an active filter means "no matches" rather than "no products".
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.query().is_empty()
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.filter(self.category, self.query())
    }
}
