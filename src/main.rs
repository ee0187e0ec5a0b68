use anyhow::Result;
use axum::http::{HeaderValue, Method, header};
use clap::Parser;
use orderflow::config::Settings;
use orderflow::{AppState, JsonStore, build_router};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::unix::{SignalKind, signal};
use tower_http::cors::CorsLayer;
use tracing::info;

fn init_tracing() {
    tracing_subscriber::fmt::init();
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(long, help = "(Optional) Sets the configuration file path.")]
    pub config: Option<String>,

    #[arg(long, help = "(Optional) Overrides the listen address, e.g. 127.0.0.1:8080.")]
    pub bind: Option<String>,

    #[arg(long, help = "(Optional) Overrides the collection data directory.")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, help = "(Optional) Overrides the allowed CORS origin.")]
    pub cors_origin: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    info!("Starting");

    let mut settings = Settings::load(&args.config)?;
    if let Some(bind) = args.bind {
        settings.bind = bind;
    }
    if let Some(data_dir) = args.data_dir {
        settings.data_dir = data_dir;
    }
    if let Some(cors_origin) = args.cors_origin {
        settings.cors_origin = Some(cors_origin);
    }

    let store = Arc::new(JsonStore::new(settings.data_dir.clone()));
    let mut app = build_router(AppState::new(store));

    if let Some(origin) = settings.cors_origin.as_deref() {
        let cors = CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true);
        app = app.layer(cors);
        info!("CORS restricted to origin {origin}");
    }

    let listener = TcpListener::bind(&settings.bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("Received SIGTERM. Shutting down...");
                },
                _ = sigint.recv() => {
                    info!("Received SIGINT. Shutting down...");
                }
            }
        })
        .await?;

    Ok(())
}
