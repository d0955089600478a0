use dioxus::prelude::*;

use bodhon_common::catalog::{Catalog, CategoryFilter};
use bodhon_common::config::HomeLayout;
use bodhon_common::session::Storefront;

use super::cart_drawer::CartDrawer;
use super::catalog_view::CatalogView;
use super::navbar::Navbar;
use super::portfolio_view::PortfolioView;
use super::product_detail::ProductDetailPage;
use super::shared_state::{startup_config, use_config, use_storefront};

#[component]
pub fn App() -> Element {
    let config = use_context_provider(startup_config);
    use_context_provider(|| Signal::new(Storefront::new(Catalog::builtin(), &config)));
    use_hook(|| tracing::info!(layout = %config.home_layout, "storefront started"));

    rsx! { AppLayout {} }
}

#[component]
fn AppLayout() -> Element {
    let store = use_storefront();
    let config = use_config();
    let has_selection = store.read().selected_product().is_some();

    rsx! {
        div { class: "bodhon-app",
            Navbar {}
            main {
                if has_selection {
                    ProductDetailPage {}
                } else {
                    {match config.home_layout {
                        HomeLayout::Catalog => rsx! {
                            Banner {}
                            CatalogView {}
                        },
                        HomeLayout::Portfolio => rsx! {
                            PortfolioView {}
                            CatalogView {}
                        },
                    }}
                }
            }
            CartDrawer {}
            Footer {}
        }
    }
}

/// Hero banner with shortcuts into each category.
#[component]
fn Banner() -> Element {
    let mut store = use_storefront();

    rsx! {
        div { class: "banner",
            h1 { "Premium Style, Local Taste." }
            p {
                "Bodhon brings you the finest selection of dropshipped fashion and daily baked goods from your neighborhood."
            }
            div { class: "banner-actions",
                button {
                    onclick: move |_| store.write().select_category(CategoryFilter::Fashion),
                    "Shop Fashion"
                }
                button {
                    onclick: move |_| store.write().select_category(CategoryFilter::Food),
                    "Order Bakery"
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let mut store = use_storefront();

    rsx! {
        footer { class: "app-footer",
            div {
                h4 { "Bodhon Sellers" }
                p { "The destination for premium curated fashion and the freshest local bakes. Quality meets community." }
            }
            div {
                h4 { "Quick Links" }
                ul {
                    li {
                        button {
                            onclick: move |_| {
                                let mut s = store.write();
                                s.close_product();
                                s.select_category(CategoryFilter::Fashion);
                            },
                            "Fashion Collection"
                        }
                    }
                    li {
                        button {
                            onclick: move |_| {
                                let mut s = store.write();
                                s.close_product();
                                s.select_category(CategoryFilter::Food);
                            },
                            "Fresh Bakery"
                        }
                    }
                }
            }
            div {
                h4 { "Get in Touch" }
                p { "Email: help@bodhon.com" }
                p { "Address: 123 Bodhon Street, Retail Hub" }
            }
        }
    }
}
