mod config;
mod page;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::config::GalleryConfig;

fn config_path() -> PathBuf {
    PathBuf::from(
        std::env::var("GALLERY_CONFIG_PATH").unwrap_or_else(|_| "gallery.toml".to_string()),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "button_gallery=info,button_web=warn".into()),
        )
        .init();

    info!("button-gallery starting...");

    let path = config_path();
    let mut config = if path.exists() {
        GalleryConfig::load_from_file(&path)?
    } else {
        info!("No config file found at {}, using defaults", path.display());
        GalleryConfig::default()
    };
    if let Ok(listen) = std::env::var("GALLERY_LISTEN") {
        config.listen = listen;
    }

    let addr: SocketAddr = config
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen))?;
    info!(buttons = config.buttons.len(), title = %config.title, "Config loaded");

    // Props never change at runtime, so the page is rendered once.
    let html: Arc<str> = page::render(config).into();

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(|| async { "ok" }))
        .with_state(html);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Gallery listening on http://{addr}");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn index(State(html): State<Arc<str>>) -> Html<String> {
    Html(html.to_string())
}
