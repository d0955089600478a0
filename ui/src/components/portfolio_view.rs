use dioxus::prelude::*;

use bodhon_common::showcase::Showcase;

/// Track-record homepage sections shown above the catalog.
#[component]
pub fn PortfolioView() -> Element {
    let showcase = use_hook(Showcase::builtin);

    rsx! {
        section { class: "track-record",
            h1 { "Our Track Record" }
            div { class: "stats",
                for stat in showcase.stats.iter() {
                    div { class: "stat", key: "{stat.label}",
                        span { class: "stat-icon", "data-icon": "{stat.icon}" }
                        p { class: "stat-value", "{stat.value}" }
                        p { class: "stat-label", "{stat.label}" }
                    }
                }
            }
            div { class: "portfolio",
                for item in showcase.portfolio.iter() {
                    div { class: "portfolio-item", key: "{item.id}",
                        img { src: "{item.image}", alt: "{item.title}" }
                        span { class: "portfolio-tag", "{item.tag}" }
                        h3 { "{item.title}" }
                        p { "{item.description}" }
                        p { class: "portfolio-stats", "{item.stats}" }
                    }
                }
            }
        }
    }
}
