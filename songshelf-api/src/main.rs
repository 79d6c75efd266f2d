//! songshelf-api - Song catalog API service
//!
//! Serves the Song resource (list, get-by-id, add, delete) over HTTP,
//! backed by SQLite. Default port 5741.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use songshelf_api::{build_router, AppState};
use songshelf_common::config::{self, TomlConfig};

#[derive(Parser, Debug)]
#[command(name = "songshelf-api", about = "Song catalog API service")]
struct Args {
    /// Folder holding songshelf.db (overrides SONGSHELF_ROOT and config file)
    #[arg(long)]
    root_folder: Option<String>,

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
        "Starting Songshelf Catalog API (songshelf-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let toml_config = TomlConfig::load("catalog-api")?;
    let root_folder = config::resolve_root_folder(args.root_folder.as_deref(), &toml_config);
    let db_path = config::database_path(&root_folder)?;
    info!("Database path: {}", db_path.display());

    let pool = songshelf_common::db::init_database(&db_path).await?;
    info!("Database connection established");

    let state = AppState::new(pool);
    let app = build_router(state);

    let port = args.port.or(toml_config.listen_port).unwrap_or(5741);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("songshelf-api listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
