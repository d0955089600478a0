pub mod cart;
pub mod catalog;
pub mod config;
pub mod currency;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod product;
pub mod session;
pub mod showcase;
