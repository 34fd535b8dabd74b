//! HTTP API serving the listing page.

pub mod error;
pub mod handlers;

use crate::config::Config;
use crate::listing::ListingPage;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{middleware, App, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

pub use error::ApiError;

/// Registers the API routes and extractor settings.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(handlers::query_config()).service(handlers::list_products);
}

/// Serves the listing API until the process is stopped.
///
/// The snapshot source is shared; each worker parses its own read-only copy
/// of the document once, when the worker starts.
pub async fn run(config: &Config, html: Arc<str>) -> Result<()> {
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(Data::new(ListingPage::parse(&html)))
            .configure(configure)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let (host, port) = config.addr();
    let server = server
        .bind((host, port))
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    info!("Serving GET /list_products on http://{}:{}", host, port);
    server.run().await.context("HTTP server failed")
}
