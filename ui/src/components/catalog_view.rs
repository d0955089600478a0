use dioxus::prelude::*;

use bodhon_common::catalog::CategoryFilter;
use bodhon_common::currency::format_rupees;
use bodhon_common::product::{Product, Tier};

use super::shared_state::{use_config, use_storefront};

#[component]
pub fn CatalogView() -> Element {
    let mut store = use_storefront();

    let (active, query, products) = {
        let s = store.read();
        let products: Vec<Product> = s.visible_products().into_iter().cloned().collect();
        (s.filter.category, s.filter.query().to_string(), products)
    };

    rsx! {
        div { class: "category-filters",
            for category in CategoryFilter::all().iter().copied() {
                button {
                    key: "{category}",
                    class: if category == active { "chip chip-active" } else { "chip" },
                    onclick: move |_| store.write().select_category(category),
                    "{category}"
                }
            }
        }
        div { class: "product-grid",
            for product in products.iter().cloned() {
                ProductCard { key: "{product.id}", product }
            }
        }
        if products.is_empty() {
            div { class: "empty-state",
                h3 { "No matches for \"{query}\"" }
                p { "Try different keywords or browse categories." }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    let mut store = use_storefront();
    let config = use_config();
    let id = product.id;
    let price = format_rupees(product.price, config.grouping);
    let tier_class = match product.tier {
        Some(Tier::Premium) => "tier tier-premium",
        Some(Tier::MidRange) => "tier tier-mid",
        _ => "tier tier-budget",
    };

    rsx! {
        div { class: "product-card",
            onclick: move |_| store.write().open_product(id),
            div { class: "product-image",
                img { src: "{product.image}", alt: "{product.name}" }
                div { class: "badges",
                    if product.is_perishable {
                        span { class: "badge badge-perishable", "Same Day" }
                    }
                    if let Some(tier) = product.tier {
                        span { class: "{tier_class}", "{tier}" }
                    }
                }
                span { class: "rating", "★ {product.rating}" }
            }
            div { class: "product-body",
                h3 { "{product.name}" }
                p { class: "description", "{product.description}" }
                div { class: "product-footer",
                    span { class: "price", "{price}" }
                    button { class: "add-button",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            store.write().add_to_cart(id);
                            tracing::debug!(%id, "added to cart");
                        },
                        "+"
                    }
                }
            }
        }
    }
}
