use thiserror::Error;

use crate::product::ProductId;

/// Failure loading catalog or showcase data from an external source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("product {id} has rating {rating}, expected 0.0 to 5.0")]
    RatingOutOfRange { id: ProductId, rating: f32 },
    #[error("review {review} on product {id} has rating {rating}, expected 0 to 5")]
    ReviewRatingOutOfRange { id: ProductId, review: u32, rating: u8 },
}

/// Failure loading a storefront configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed storefront config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown home layout {0:?}, expected \"catalog\" or \"portfolio\"")]
    UnknownLayout(String),
}
