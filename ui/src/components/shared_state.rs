use dioxus::prelude::*;

use bodhon_common::config::{HomeLayout, StorefrontConfig};
use bodhon_common::session::Storefront;

/// Settings the app was launched with.
pub fn startup_config() -> StorefrontConfig {
    let mut config = StorefrontConfig::default();
    if cfg!(feature = "portfolio-home") {
        config.home_layout = HomeLayout::Portfolio;
    }
    config
}

/// The storefront session shared by every component.
///
/// Catalog, filter, cart and detail selection all live here so both
/// homepage layouts read and mutate the same state.
pub fn use_storefront() -> Signal<Storefront> {
    use_context::<Signal<Storefront>>()
}

pub fn use_config() -> StorefrontConfig {
    use_context::<StorefrontConfig>()
}
