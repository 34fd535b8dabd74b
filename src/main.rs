//! listing-api - HTTP API over a saved e-commerce listing page

use anyhow::Result;
use clap::{Parser, Subcommand};
use listing_api::commands::{ListCommand, ServeCommand};
use listing_api::config::{Config, OutputFormat};
use listing_api::ProductQuery;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "listing-api",
    version,
    about = "HTTP API serving products from a saved listing page"
)]
struct Cli {
    /// Saved listing page (HTML)
    #[arg(short, long, global = true, env = "LISTING_PAGE")]
    page: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve GET /list_products over HTTP
    #[command(alias = "s")]
    Serve {
        /// Address to bind
        #[arg(long, env = "LISTING_BIND")]
        bind: Option<String>,

        /// Port to listen on
        #[arg(long, env = "LISTING_PORT")]
        port: Option<u16>,

        /// Number of worker threads
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Print the products without starting the server
    #[command(alias = "l")]
    List {
        /// Only best-selling products
        #[arg(long)]
        best_seller: bool,

        /// Only products rated strictly above this value
        #[arg(long)]
        rating: Option<f64>,

        /// Only the product with exactly this name
        #[arg(long)]
        name: Option<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

/// Warnings by default, plus the actix access log; everything with `--verbose`.
fn log_filter(verbose: bool) -> Result<EnvFilter> {
    if verbose {
        return Ok(EnvFilter::new(Level::DEBUG.to_string()));
    }

    Ok(EnvFilter::from_default_env()
        .add_directive(Level::WARN.into())
        .add_directive("actix_web=info".parse()?))
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_env_filter(log_filter(cli.verbose)?).with_target(false).init();

    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(page) = cli.page {
        config.page = page;
    }

    match cli.command {
        Commands::Serve { bind, port, workers } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if workers.is_some() {
                config.workers = workers;
            }

            ServeCommand::new(config).execute().await?;
        }

        Commands::List { best_seller, rating, name, format } => {
            if let Some(format) = format {
                config.format = format;
            }

            let query = ProductQuery {
                best_seller: best_seller.then(|| "true".to_string()),
                rating,
                name,
            };

            let output = ListCommand::new(config).execute(&query)?;
            println!("{}", output);
        }
    }

    Ok(())
}
