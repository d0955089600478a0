use dioxus::prelude::*;

use bodhon_common::catalog::CategoryFilter;
use bodhon_common::currency::format_rupees;
use bodhon_common::detail::DetailTab;

use super::shared_state::{use_config, use_storefront};

#[component]
pub fn ProductDetailPage() -> Element {
    let mut store = use_storefront();
    let config = use_config();

    let s = store.read();
    let Some(detail) = s.detail() else {
        return rsx! {};
    };
    let product = detail.product.clone();
    let tab = detail.tab;
    let specifications = detail.specifications().to_vec();
    let reviews = detail.reviews().to_vec();
    drop(s);

    let category = product.category;
    let review_count = reviews.len();
    let price = format_rupees(product.price, config.grouping);
    let tab_class = |t: DetailTab| if t == tab { "tab tab-active" } else { "tab" };

    rsx! {
        div { class: "product-detail",
            button { class: "back-button",
                onclick: move |_| store.write().close_product(),
                "Back to Collection"
            }
            div { class: "detail-grid",
                div { class: "detail-images",
                    img { src: "{product.image}", alt: "{product.name}" }
                }
                div { class: "detail-info",
                    div { class: "detail-tags",
                        span { class: "category-tag",
                            onclick: move |_| {
                                let mut s = store.write();
                                s.close_product();
                                s.select_category(CategoryFilter::from(category));
                            },
                            "{product.category} / {product.sub_category}"
                        }
                        if product.is_perishable {
                            span { class: "badge badge-perishable", "Same Day" }
                        }
                    }
                    h1 { "{product.name}" }
                    div { class: "detail-rating",
                        span { "★ {product.rating}" }
                        span { "{review_count} Customer Reviews" }
                    }
                    p { class: "price", "{price}" }
                    p { class: "description", "{product.description}" }
                    button { class: "add-to-cart",
                        onclick: move |_| store.write().add_selected_to_cart(),
                        "Add to Cart"
                    }
                    div { class: "assurances",
                        div { p { "Shipping" } p { "Free Delivery" } }
                        div { p { "Assurance" } p { "Quality Verified" } }
                    }
                    div { class: "detail-tabs",
                        button {
                            class: tab_class(DetailTab::Details),
                            onclick: move |_| store.write().set_detail_tab(DetailTab::Details),
                            "{DetailTab::Details.label()}"
                        }
                        button {
                            class: tab_class(DetailTab::Reviews),
                            onclick: move |_| store.write().set_detail_tab(DetailTab::Reviews),
                            "Reviews ({review_count})"
                        }
                    }
                    div { class: "tab-panel",
                        if tab == DetailTab::Details {
                            ul { class: "specifications",
                                for spec in specifications.iter() {
                                    li { "{spec}" }
                                }
                            }
                        } else {
                            div { class: "reviews",
                                for review in reviews.iter() {
                                    div { class: "review", key: "{review.id}",
                                        div { class: "review-header",
                                            p { class: "review-user", "{review.user}" }
                                            span { class: "review-date", "{review.date}" }
                                        }
                                        div { class: "stars",
                                            for filled in review.stars() {
                                                span { class: if filled { "star star-filled" } else { "star" }, "★" }
                                            }
                                        }
                                        p { class: "review-comment", "\"{review.comment}\"" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
