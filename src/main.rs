use crate::catalog::Catalog;
use crate::config::Config;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vibemarket=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let config = Config::parse();

    // 1. Load listings once; they are read-only from here on
    let loaded = match &config.data {
        Some(path) => Catalog::from_path(path),
        None => Catalog::bundled(),
    };
    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "failed to load listings");
            std::process::exit(1);
        }
    };
    tracing::info!(
        listings = catalog.listings().len(),
        categories = catalog.categories().len() - 1,
        source = config
            .data
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled".to_string()),
        "catalog loaded"
    );

    // 2. Start the server
    tracing::info!("Starting server at http://{}", config.bind);
    let server = Server::bind(&config.bind).max_workers(config.workers);

    // 3. Serve requests, sharing the catalog with every worker
    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, status = err.status(), "request failed");
            templates::html_error_response(&err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    tracing::info!("Server shut down cleanly.");
}
