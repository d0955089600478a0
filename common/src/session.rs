use std::time::Duration;

use crate::cart::Cart;
use crate::catalog::{Catalog, CatalogFilter, CategoryFilter};
use crate::config::StorefrontConfig;
use crate::debounce::Ticket;
use crate::detail::{select_product, DetailTab, ProductDetail};
use crate::product::{Product, ProductId};

/// All interactive state for one storefront visit.
///
/// Both homepage layouts render from the same session; nothing here is
/// layout-specific. State lives for the page lifetime only.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    pub filter: CatalogFilter,
    pub cart: Cart,
    selected: Option<ProductId>,
    tab: DetailTab,
    cart_open: bool,
}

impl Storefront {
    pub fn new(catalog: Catalog, config: &StorefrontConfig) -> Self {
        Self {
            catalog,
            filter: CatalogFilter::new(config.search_quiet_period()),
            cart: Cart::new(),
            selected: None,
            tab: DetailTab::Details,
            cart_open: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn type_query(&mut self, text: impl Into<String>, now: Duration) -> Ticket {
        self.filter.type_query(text, now)
    }

    pub fn poll_query(&mut self, now: Duration) -> bool {
        self.filter.poll_query(now)
    }

    pub fn settle_query(&mut self, ticket: Ticket) -> bool {
        self.filter.settle_query(ticket)
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.visible(&self.catalog)
    }

    /// Show a product's detail page, starting on the details panel.
    pub fn open_product(&mut self, id: ProductId) {
        self.selected = Some(id);
        self.tab = DetailTab::Details;
    }

    /// Back to the catalog view.
    pub fn close_product(&mut self) {
        self.selected = None;
    }

    pub fn selected_product(&self) -> Option<&Product> {
        select_product(&self.catalog, self.selected)
    }

    pub fn detail(&self) -> Option<ProductDetail<'_>> {
        self.selected_product()
            .map(|product| ProductDetail::new(product, self.tab))
    }

    pub fn detail_tab(&self) -> DetailTab {
        self.tab
    }

    pub fn set_detail_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    /// Add one unit of a catalog product. Unknown ids are ignored.
    pub fn add_to_cart(&mut self, id: ProductId) {
        if let Some(product) = self.catalog.find(id) {
            self.cart.add(product);
        }
    }

    pub fn add_selected_to_cart(&mut self) {
        if let Some(id) = self.selected {
            self.add_to_cart(id);
        }
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove(id);
    }

    pub fn adjust_quantity(&mut self, id: ProductId, delta: i32) {
        self.cart.set_quantity_delta(id, delta);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Storefront {
        Storefront::new(Catalog::builtin(), &StorefrontConfig::default())
    }

    #[test]
    fn detail_add_uses_selected_product() {
        let mut sf = storefront();
        sf.add_selected_to_cart();
        assert!(sf.cart.is_empty(), "nothing selected");

        sf.open_product(ProductId(7));
        sf.add_selected_to_cart();
        sf.add_selected_to_cart();
        assert_eq!(sf.cart.quantity_of(ProductId(7)), 2);
        assert_eq!(sf.cart.total_price(), 290);
    }

    #[test]
    fn opening_a_product_resets_the_tab() {
        let mut sf = storefront();
        sf.open_product(ProductId(1));
        sf.set_detail_tab(DetailTab::Reviews);
        sf.close_product();
        assert!(sf.detail().is_none());

        sf.open_product(ProductId(2));
        assert_eq!(sf.detail().map(|d| d.tab), Some(DetailTab::Details));
    }

    #[test]
    fn unknown_selection_falls_back_to_catalog() {
        let mut sf = storefront();
        sf.open_product(ProductId(404));
        assert!(sf.selected_product().is_none());
        sf.add_selected_to_cart();
        assert!(sf.cart.is_empty());
    }

    #[test]
    fn cart_drawer_toggles() {
        let mut sf = storefront();
        assert!(!sf.is_cart_open());
        sf.open_cart();
        assert!(sf.is_cart_open());
        sf.close_cart();
        assert!(!sf.is_cart_open());
    }
}
