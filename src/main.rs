//! Portfolio host: serves the server-rendered page, its compiled assets, and
//! a health probe. All page behavior runs in the browser.

mod config;
mod routes;

use std::error::Error;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio host failed");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn Error>> {
    let site = config::SiteConfig::from_env()?;
    let conf = get_configuration(None)?;
    let app = routes::app(conf.leptos_options);

    let addr = site.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
