use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use nihongo_config::Config;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod state;


use self::controller::AppController;
use self::state::AppState;

#[derive(Debug, Parser)]
#[command(
    name = "nihongo-notes",
    about = "Japanese vocabulary flashcards with an AI Sensei",
    version
)]
struct Cli {
    /// JSON config file; defaults and environment are used when omitted
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// CSV export URL, overrides the configured sheet
    #[arg(long)]
    sheet_url: Option<String>,

    /// Read the word list from a local CSV file instead of the network
    #[arg(long, conflicts_with = "sheet_url")]
    csv: Option<PathBuf>,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    if let Some(url) = cli.sheet_url.clone() {
        config.sheet.url = Some(url);
    }
    tracing::debug!("Sensei config: {:?}", config.sensei);

    let state = Arc::new(AppState::new(config, cli.csv));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("nihongo-worker")
        .build()?;

    let controller = AppController::new(state.clone());
    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_channels();

    let mut tasks = {
        let _guard = runtime.enter();
        controller.spawn_tasks()
    };

    // Shutdown on Ctrl+C
    {
        let cancel = controller.cancel_token();
        runtime.spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown requested");
                cancel.cancel();
                nihongo_ui::request_quit();
            }
        });
    }

    // Slint needs the main thread
    let ui_result = nihongo_ui::run(&state.config, app_to_ui_rx, ui_to_app_tx);

    controller.shutdown();
    runtime.block_on(async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => tracing::info!("Backend task finished"),
                Ok(Err(e)) => tracing::error!("Backend task failed: {e}"),
                Err(e) => tracing::error!("Backend task panicked: {e}"),
            }
        }
    });

    ui_result
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,nihongo_app=debug,nihongo_core=debug,nihongo_ui=debug")
    });

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_writer(std::io::stderr)
            .init();
    }
}
