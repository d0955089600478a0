use std::time::Duration;

use bodhon_common::catalog::{Catalog, CategoryFilter};
use bodhon_common::detail::DetailTab;
use bodhon_common::error::CatalogError;
use bodhon_common::product::ProductId;
use bodhon_storefront_flow::Visit;

#[test]
fn quiet_period_keeps_last_keystroke() {
    let mut visit = Visit::new();
    visit.keystroke("muf", 0);
    visit.keystroke("muffin", 100);

    visit.advance_to(499);
    assert_eq!(visit.filtering_on(), "");
    assert_eq!(visit.visible_ids().len(), 8);

    visit.advance_to(600);
    assert_eq!(visit.filtering_on(), "muffin");
    assert_eq!(visit.visible_ids(), vec![6, 7, 8]);
}

#[test]
fn paused_typing_settles_without_polling() {
    let mut visit = Visit::new();
    visit.storefront.type_query("muf", Duration::ZERO);
    visit.storefront.type_query("muffin", Duration::from_millis(600));

    assert_eq!(visit.storefront.filter.query(), "muf");
    assert_eq!(visit.storefront.filter.raw_query(), "muffin");
    assert_eq!(visit.visible_ids(), vec![6, 7, 8]);
}

#[test]
fn keystroke_within_window_restarts_timer() {
    let mut visit = Visit::new();
    visit.keystroke("a", 0);
    visit.keystroke("ab", 100);
    visit.keystroke("abc", 450);

    visit.advance_to(600);
    assert_eq!(visit.filtering_on(), "", "nothing settled while typing");
    visit.advance_to(850);
    assert_eq!(visit.filtering_on(), "abc");
}

#[test]
fn category_change_applies_immediately() {
    let mut visit = Visit::new();
    visit.pick(CategoryFilter::Food);
    assert_eq!(visit.visible_ids(), vec![6, 7, 8]);

    visit.keystroke("chocolate", 0);
    visit.advance_to(400);
    assert_eq!(visit.visible_ids(), vec![6]);

    visit.pick(CategoryFilter::Fashion);
    assert!(visit.visible_ids().is_empty());
    assert!(visit.storefront.filter.is_active());
}

#[test]
fn shopping_round_trip() {
    let mut visit = Visit::new();
    visit.add(6);
    visit.add(6);
    visit.add(2);
    visit.storefront.open_product(ProductId(1));
    visit.storefront.add_selected_to_cart();

    assert_eq!(visit.cart_ids(), vec![6, 2, 1]);
    assert_eq!(visit.storefront.cart.total_count(), 4);
    assert_eq!(visit.storefront.cart.total_price(), 120 * 2 + 1850 + 12500);

    visit.storefront.adjust_quantity(ProductId(6), -5);
    visit.storefront.adjust_quantity(ProductId(2), 2);
    visit.storefront.remove_from_cart(ProductId(1));
    assert_eq!(visit.cart_ids(), vec![6, 2]);
    assert_eq!(visit.storefront.cart.total_price(), 120 + 1850 * 3);

    visit.storefront.clear_cart();
    assert_eq!(visit.storefront.cart.total_price(), 0);
    assert_eq!(visit.storefront.cart.total_count(), 0);
    assert!(visit.cart_ids().is_empty());
}

#[test]
fn unknown_product_add_is_ignored() {
    let mut visit = Visit::new();
    visit.add(77);
    assert!(visit.cart_ids().is_empty());
}

#[test]
fn detail_view_shows_reviews_and_specs() {
    let mut visit = Visit::new();
    visit.storefront.open_product(ProductId(6));
    let detail = visit.storefront.detail().unwrap();
    assert_eq!(detail.tab, DetailTab::Details);
    assert_eq!(detail.specifications().len(), 4);
    assert_eq!(detail.review_count(), 1);
    assert_eq!(detail.reviews()[0].user, "Foodie Meera");

    let tab = visit.storefront.detail_tab().toggle();
    visit.storefront.set_detail_tab(tab);
    assert_eq!(visit.storefront.detail().map(|d| d.tab), Some(DetailTab::Reviews));

    visit.storefront.close_product();
    assert!(visit.storefront.selected_product().is_none());
}

#[test]
fn sparse_catalog_product_renders_empty_sections() {
    let json = serde_json::json!([{
        "id": 10,
        "name": "Seasonal Tea Cake",
        "category": "Food",
        "subCategory": "Bakery",
        "price": 90,
        "rating": 4.0,
        "image": "https://placehold.co/800?text=Tea+Cake",
        "description": "Light sponge with cardamom.",
        "isPerishable": true
    }]);
    let catalog = Catalog::from_json(&json.to_string()).unwrap();
    let mut visit = Visit::with_catalog(catalog);
    visit.storefront.open_product(ProductId(10));

    let detail = visit.storefront.detail().unwrap();
    assert!(detail.specifications().is_empty());
    assert!(detail.reviews().is_empty());
}

#[test]
fn empty_catalog_and_no_matches_look_the_same() {
    let empty = Visit::with_catalog(Catalog::default());
    assert!(empty.visible_ids().is_empty());
    assert!(!empty.storefront.filter.is_active());

    let mut searching = Visit::new();
    searching.keystroke("zzz", 0);
    searching.advance_to(400);
    assert!(searching.visible_ids().is_empty());
    assert!(searching.storefront.filter.is_active());
}

#[test]
fn rating_above_five_is_rejected() {
    let json = serde_json::json!([{
        "id": 1,
        "name": "Too Good",
        "category": "Fashion",
        "subCategory": "Watch",
        "price": 1,
        "rating": 5.5,
        "image": "",
        "description": "",
        "isPerishable": false
    }]);
    assert!(matches!(
        Catalog::from_json(&json.to_string()),
        Err(CatalogError::RatingOutOfRange { .. })
    ));
}
