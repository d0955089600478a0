pub mod app;
pub mod cart_drawer;
pub mod catalog_view;
pub mod clock;
pub mod navbar;
pub mod portfolio_view;
pub mod product_detail;
pub mod shared_state;
