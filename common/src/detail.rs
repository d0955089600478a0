use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::product::{Product, ProductId, Review};

/// Look up the product a detail page should show. `None` means the
/// catalog view is rendered instead.
pub fn select_product(catalog: &Catalog, selected: Option<ProductId>) -> Option<&Product> {
    selected.and_then(|id| catalog.find(id))
}

/// Which panel of the detail page is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailTab {
    #[default]
    Details,
    Reviews,
}

impl DetailTab {
    pub fn toggle(self) -> Self {
        match self {
            DetailTab::Details => DetailTab::Reviews,
            DetailTab::Reviews => DetailTab::Details,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Details => "Specifications",
            DetailTab::Reviews => "Reviews",
        }
    }
}

/// A product paired with the active detail panel.
#[derive(Debug, Clone, Copy)]
pub struct ProductDetail<'a> {
    pub product: &'a Product,
    pub tab: DetailTab,
}

impl<'a> ProductDetail<'a> {
    pub fn new(product: &'a Product, tab: DetailTab) -> Self {
        Self { product, tab }
    }

    pub fn specifications(&self) -> &'a [String] {
        &self.product.specifications
    }

    pub fn reviews(&self) -> &'a [Review] {
        &self.product.reviews
    }

    pub fn review_count(&self) -> usize {
        self.product.reviews.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_resolves_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(
            select_product(&catalog, Some(ProductId(4))).map(|p| p.name.as_str()),
            Some("Royal Temple Jhumkas")
        );
        assert!(select_product(&catalog, Some(ProductId(100))).is_none());
        assert!(select_product(&catalog, None).is_none());
    }

    #[test]
    fn tab_toggles_both_ways() {
        assert_eq!(DetailTab::default(), DetailTab::Details);
        assert_eq!(DetailTab::Details.toggle(), DetailTab::Reviews);
        assert_eq!(DetailTab::Reviews.toggle(), DetailTab::Details);
    }

    #[test]
    fn missing_sections_render_empty() {
        let mut product = Catalog::builtin().products()[0].clone();
        product.specifications.clear();
        product.reviews.clear();
        let detail = ProductDetail::new(&product, DetailTab::Reviews);
        assert!(detail.specifications().is_empty());
        assert!(detail.reviews().is_empty());
        assert_eq!(detail.review_count(), 0);
    }
}
