use anyhow::Context;
use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use thesis_core::extraction::Extractor;
use tracing::info;

use crate::server::{self, AppState};

/// Command-line arguments for the HTTP service
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long, env = "THESIS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "THESIS_PORT", default_value = "5000")]
    pub port: u16,

    /// Directory for transient upload files (defaults to the system temp dir)
    #[arg(long, env = "THESIS_UPLOAD_DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Maximum upload size in MiB
    #[arg(long, env = "THESIS_MAX_UPLOAD_MB", default_value = "16")]
    pub max_upload_mb: usize,
}

pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(serve(args))
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    thesis_core::init();

    let upload_dir = args.upload_dir.unwrap_or_else(std::env::temp_dir);
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .with_context(|| format!("failed to create upload dir {}", upload_dir.display()))?;

    let state = AppState {
        extractor: Arc::new(Extractor::default()),
        upload_dir,
        max_upload_bytes: args.max_upload_mb * 1024 * 1024,
    };

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.host, args.port))?;

    info!("Starting Thesis Analyzer API...");
    info!("Upload dir: {}", state.upload_dir.display());
    info!("Max upload size: {} MiB", args.max_upload_mb);
    info!("PDF backend: {}", state.extractor.pdf_backend_name());

    let app = server::router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API available at http://{}", addr);
    info!("  GET  /api/health");
    info!("  POST /api/analyze-thesis");

    axum::serve(listener, app).await?;

    Ok(())
}
