use dioxus::prelude::*;

use super::clock;
use super::shared_state::use_storefront;

#[component]
pub fn Navbar() -> Element {
    let mut store = use_storefront();
    let count = store.read().cart.total_count();

    rsx! {
        nav { class: "navbar",
            div { class: "brand",
                onclick: move |_| store.write().close_product(),
                span { class: "brand-name", "Bodhon " }
                span { class: "brand-suffix", "Sellers" }
            }
            SearchBox {}
            button { class: "cart-button",
                onclick: move |_| store.write().open_cart(),
                "Cart"
                if count > 0 {
                    span { class: "cart-badge", "{count}" }
                }
            }
        }
    }
}

/// Search input. Each keystroke replaces the single pending timer; the
/// filter only changes once typing pauses for the quiet period.
#[component]
fn SearchBox() -> Element {
    let mut store = use_storefront();
    let mut timer = use_signal(|| None::<Task>);
    let raw = store.read().filter.raw_query().to_string();

    rsx! {
        div { class: "search",
            input {
                r#type: "text",
                placeholder: "Search products...",
                value: "{raw}",
                oninput: move |evt| {
                    let ticket = store.write().type_query(evt.value(), clock::now());
                    let quiet = store.read().filter.quiet_period();
                    if let Some(previous) = timer.write().take() {
                        previous.cancel();
                    }
                    let task = spawn(async move {
                        clock::sleep(quiet).await;
                        let mut s = store.write();
                        if s.settle_query(ticket) {
                            tracing::debug!(query = s.filter.query(), "search settled");
                        }
                    });
                    timer.set(Some(task));
                },
            }
            if !raw.is_empty() {
                button { class: "search-clear",
                    onclick: move |_| {
                        if let Some(previous) = timer.write().take() {
                            previous.cancel();
                        }
                        store.write().filter.clear_query();
                    },
                    "×"
                }
            }
        }
    }
}
