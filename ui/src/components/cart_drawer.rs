use dioxus::prelude::*;

use bodhon_common::cart::CartEntry;
use bodhon_common::currency::format_rupees;

use super::shared_state::{use_config, use_storefront};

#[component]
pub fn CartDrawer() -> Element {
    let mut store = use_storefront();
    let config = use_config();

    let (open, entries, count, total) = {
        let s = store.read();
        (
            s.is_cart_open(),
            s.cart.entries().to_vec(),
            s.cart.total_count(),
            s.cart.total_price(),
        )
    };
    let total = format_rupees(total, config.grouping);

    rsx! {
        if open {
            div { class: "cart-overlay", onclick: move |_| store.write().close_cart() }
        }
        aside { class: if open { "cart-drawer cart-drawer-open" } else { "cart-drawer" },
            div { class: "cart-header",
                h2 { "My Cart" }
                button { onclick: move |_| store.write().close_cart(), "Close" }
            }
            div { class: "cart-items",
                if entries.is_empty() {
                    div { class: "empty-state",
                        p { "Your basket is empty" }
                        button { onclick: move |_| store.write().close_cart(), "Browse Products" }
                    }
                } else {
                    div { class: "cart-summary-header",
                        h3 { "Items ({count})" }
                        button { class: "clear-cart",
                            onclick: move |_| {
                                store.write().clear_cart();
                                tracing::debug!("cart cleared");
                            },
                            "Clear Cart"
                        }
                    }
                    for entry in entries.iter().cloned() {
                        CartLine { key: "{entry.product.id}", entry }
                    }
                }
            }
            if !entries.is_empty() {
                div { class: "cart-footer",
                    div { class: "cart-row", span { "Subtotal" } span { "{total}" } }
                    div { class: "cart-row", span { "Shipping" } span { class: "free", "Free" } }
                    div { class: "cart-row cart-total", span { "Est. Total" } span { "{total}" } }
                    button { class: "checkout", "Proceed to Pay" }
                }
            }
        }
    }
}

#[component]
fn CartLine(entry: CartEntry) -> Element {
    let mut store = use_storefront();
    let config = use_config();
    let id = entry.id();
    let line_total = format_rupees(entry.line_total(), config.grouping);
    let unit_price = format_rupees(entry.product.price, config.grouping);

    rsx! {
        div { class: "cart-line",
            img { src: "{entry.product.image}", alt: "{entry.product.name}" }
            div { class: "cart-line-body",
                div { class: "cart-line-title",
                    h4 { "{entry.product.name}" }
                    span { "{line_total}" }
                }
                p { class: "unit-price", "{unit_price} / unit" }
                div { class: "cart-line-controls",
                    button { onclick: move |_| store.write().adjust_quantity(id, -1), "−" }
                    span { class: "quantity", "{entry.quantity}" }
                    button { onclick: move |_| store.write().adjust_quantity(id, 1), "+" }
                    button { class: "remove",
                        onclick: move |_| {
                            store.write().remove_from_cart(id);
                            tracing::debug!(%id, "removed from cart");
                        },
                        "Remove"
                    }
                }
            }
        }
    }
}
