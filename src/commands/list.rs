//! List command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::listing::{ListingPage, ProductQuery};
use anyhow::{Context, Result};
use tracing::info;

/// Prints the filtered product list without starting the server.
pub struct ListCommand {
    config: Config,
}

impl ListCommand {
    /// Creates a new list command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the configured page and returns formatted output.
    pub fn execute(&self, query: &ProductQuery) -> Result<String> {
        let page = ListingPage::from_file(&self.config.page)?;
        self.execute_with_page(&page, query)
    }

    /// Runs the query against an already loaded page (for testing).
    pub fn execute_with_page(&self, page: &ListingPage, query: &ProductQuery) -> Result<String> {
        let products = page
            .list_products(query)
            .with_context(|| format!("Failed to extract products from {}", self.config.page.display()))?;

        info!("Found {} products matching criteria", products.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_products(&products))
    }
}
