use anyhow::Result;
use clap::Parser;
use quill_core::{AppConfig, AppState};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quill=info,tower_http=debug")),
        )
        .init();

    let args = cli::Args::parse();
    let config = config::Config::load(&args.config)?;

    ensure_data_dir(&config.database.url);

    let db = quill_db::create_pool(&config.database.url, config.database.max_connections).await?;
    let engine = quill_db::detect_database_engine(&config.database.url)?;
    quill_db::run_migrations(&db, engine).await?;

    let state = AppState {
        db,
        config: AppConfig {
            page_size: config.blog.page_size.max(1),
            public_url: config.server.public_url.clone(),
        },
    };

    let app = quill_api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(
        "quill-server listening on http://{} ({} backend)",
        config.server.bind_address,
        engine.as_str()
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Local sqlite files need their parent directory to exist before the pool
/// can create the database.
fn ensure_data_dir(database_url: &str) {
    let Some(path) = database_url
        .strip_prefix("sqlite://")
        .map(|rest| rest.split('?').next().unwrap_or(rest))
    else {
        return;
    };
    if path == ":memory:" {
        return;
    }
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!("could not create data directory {:?}: {}", parent, err);
            }
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", err);
    }
}
