//! listing-api - HTTP API over a saved e-commerce listing page
//!
//! Parses a stored search results page and serves its products as JSON,
//! filtered by best-seller status, rating, or name.

pub mod commands;
pub mod config;
pub mod filters;
pub mod format;
pub mod listing;
pub mod server;

pub use config::Config;
pub use listing::{ListingPage, Product, ProductQuery};
