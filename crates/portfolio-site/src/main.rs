mod cache;
mod config;
mod error;
mod server;
mod views;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cache::PageCache;
use config::Config;
use portfolio_common::content::Portfolio;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting portfolio site");

    let config = Config::from_env()?;
    info!(
        listen_addr = %config.listen_addr,
        public_dir = %config.public_dir.display(),
        client = config.client_module.is_some(),
        "configuration loaded"
    );
    if !config.stylesheet_path().is_file() {
        warn!(
            path = %config.stylesheet_path().display(),
            "stylesheet missing, page will render unstyled"
        );
    }

    let portfolio = Portfolio::get();
    portfolio.validate()?;
    info!(
        skills = portfolio.skills.len(),
        projects = portfolio.projects.len(),
        achievements = portfolio.achievements.len(),
        "content validated"
    );

    let page = PageCache::build(portfolio, config.client_module.as_deref(), &mut rand::rng());
    info!(bytes = page.html().len(), etag = %page.etag(), "page rendered");

    let app = server::router(AppState::new(portfolio, page), &config.public_dir);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %config.listen_addr, "portfolio site ready");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("portfolio site shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
