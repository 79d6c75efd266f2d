//! songshelf-web - HTML front-end for the Song catalog
//!
//! Renders the catalog pages and forwards every data operation to the
//! songshelf-api process. Default port 5740.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use songshelf_common::config::{self, TomlConfig};
use songshelf_web::{build_router, AppState, SongClient};

#[derive(Parser, Debug)]
#[command(name = "songshelf-web", about = "Song catalog web front-end")]
struct Args {
    /// Base URL of the catalog API (overrides SONGSHELF_API_URL and config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Songshelf Web (songshelf-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let toml_config = TomlConfig::load("web")?;
    let api_base_url = config::resolve_api_base_url(args.api_url.as_deref(), &toml_config);
    info!("Catalog API: {}", api_base_url);

    let client = SongClient::new(api_base_url)?;
    let state = AppState::new(client);
    let app = build_router(state);

    let port = args.port.or(toml_config.listen_port).unwrap_or(5740);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("songshelf-web listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
