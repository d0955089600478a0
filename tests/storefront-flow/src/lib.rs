//! Scripted storefront visits for end-to-end tests.
//!
//! A [`Visit`] wraps a [`Storefront`] session with a virtual clock so search
//! debouncing can be exercised at exact millisecond offsets.

use std::time::Duration;

use bodhon_common::catalog::{Catalog, CategoryFilter};
use bodhon_common::config::StorefrontConfig;
use bodhon_common::product::ProductId;
use bodhon_common::session::Storefront;

pub struct Visit {
    pub storefront: Storefront,
    clock: Duration,
}

impl Visit {
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            storefront: Storefront::new(catalog, &StorefrontConfig::default()),
            clock: Duration::ZERO,
        }
    }

    /// Advance the clock to `at_ms`, letting any due search timer fire.
    pub fn advance_to(&mut self, at_ms: u64) {
        let at = Duration::from_millis(at_ms);
        assert!(at >= self.clock, "clock cannot run backwards");
        self.clock = at;
        self.storefront.poll_query(at);
    }

    /// Replace the search box contents at `at_ms`.
    pub fn keystroke(&mut self, text: &str, at_ms: u64) {
        self.advance_to(at_ms);
        self.storefront.type_query(text, self.clock);
    }

    pub fn pick(&mut self, category: CategoryFilter) {
        self.storefront.select_category(category);
    }

    pub fn add(&mut self, id: u32) {
        self.storefront.add_to_cart(ProductId(id));
    }

    pub fn filtering_on(&self) -> &str {
        self.storefront.filter.query()
    }

    pub fn visible_ids(&self) -> Vec<u32> {
        self.storefront
            .visible_products()
            .iter()
            .map(|p| p.id.0)
            .collect()
    }

    pub fn cart_ids(&self) -> Vec<u32> {
        self.storefront
            .cart
            .entries()
            .iter()
            .map(|e| e.id().0)
            .collect()
    }
}

impl Default for Visit {
    fn default() -> Self {
        Self::new()
    }
}
