//! Listing page loading, parsing, and data models.

pub mod error;
pub mod models;
pub mod page;
pub mod parser;
pub mod selectors;

pub use error::ExtractError;
pub use models::{Product, ProductQuery};
pub use page::ListingPage;
pub use parser::Parser;
