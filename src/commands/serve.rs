//! Serve command implementation.

use crate::config::Config;
use crate::listing::page::read_snapshot;
use crate::listing::ListingPage;
use crate::server;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Starts the HTTP API over the configured listing page.
pub struct ServeCommand {
    config: Config,
}

impl ServeCommand {
    /// Creates a new serve command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads the snapshot once and serves it until shutdown.
    pub async fn execute(&self) -> Result<()> {
        let html: Arc<str> = read_snapshot(&self.config.page)?.into();

        // Broken markup is reported per request; surface it early in the log too
        match ListingPage::parse(&html).products() {
            Ok(products) => info!(
                "Loaded {} products from {}",
                products.len(),
                self.config.page.display()
            ),
            Err(e) => warn!("Listing page {} will fail requests: {}", self.config.page.display(), e),
        }

        server::run(&self.config, html).await
    }
}
