//! Errors raised while extracting products from the listing markup.

use thiserror::Error;

/// The snapshot does not have the markup a product record needs.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("product link {href:?} has no product id segment")]
    MissingProductId { href: String },

    #[error("no image link with alt text found for {href:?}")]
    MissingName { href: String },

    #[error("product link {href:?} has no {part} price fragment")]
    MissingPrice { href: String, part: &'static str },

    #[error("malformed price {text:?} for {href:?}")]
    InvalidPrice { href: String, text: String },

    #[error("malformed rating {text:?} for {href:?}")]
    InvalidRating { href: String, text: String },
}
