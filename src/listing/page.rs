//! The saved listing page, loaded once and queried per request.

use crate::filters::FilterChain;
use crate::listing::error::ExtractError;
use crate::listing::models::{Product, ProductQuery};
use crate::listing::parser::Parser;
use anyhow::{Context, Result};
use scraper::Html;
use std::path::Path;
use tracing::debug;

/// Reads the raw snapshot HTML from disk.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Loading listing snapshot from: {}", path.display());

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listing page: {}", path.display()))
}

/// A parsed listing page. The document is never modified after parsing.
pub struct ListingPage {
    document: Html,
}

impl ListingPage {
    /// Parses a listing page from its HTML source.
    pub fn parse(html: &str) -> Self {
        Self { document: Html::parse_document(html) }
    }

    /// Reads and parses a listing page from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        read_snapshot(path).map(|html| Self::parse(&html))
    }

    /// Extracts every product on the page.
    pub fn products(&self) -> Result<Vec<Product>, ExtractError> {
        Parser::new(&self.document).parse_products()
    }

    /// Extracts the products on the page that pass the query's filters.
    pub fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ExtractError> {
        let filters = FilterChain::from_query(query);

        if let Some(summary) = filters.summary() {
            debug!("Active filters: {}", summary);
        }

        let mut products = self.products()?;
        filters.retain(&mut products);

        // A name lookup yields at most one product
        if query.name.is_some() {
            products.truncate(1);
        }

        Ok(products)
    }
}
