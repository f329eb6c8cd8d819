//! Kedai binary entry point
//!
//! Parses configuration, initializes the logging system, then hands
//! control to the terminal event loop.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use kedai::app::{self, App};
use kedai::event::{self, AppEvent};
use kopi_client::ClientConfig;
use tokio::sync::mpsc;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "kedai", version, about = "Kopi storefront terminal client")]
struct Args {
    /// Ordering API base URL
    #[arg(long, env = "KOPI_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "KOPI_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Directory for the cart/session records and logs
    #[arg(long, env = "KOPI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log filter (tracing EnvFilter syntax)
    #[arg(
        long,
        env = "KOPI_LOG",
        default_value = "info,kedai=debug,kopi_client=debug"
    )]
    log_filter: String,
}

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

/// Initialize the logging system: a daily rolling file plus the in-app
/// log pane. Nothing writes to stdout, which belongs to the TUI.
fn init_tracing(
    log_dir: &Path,
    filter: &str,
) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create logs directory {}", log_dir.display()))?;

    let file_appender = rolling::daily(log_dir, "kedai.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tui_logger::init_logger(log::LevelFilter::Debug)
        .map_err(|e| anyhow::anyhow!("Failed to init log pane: {}", e))?;

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(tui_logger::tracing_subscriber_layer())
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| PathBuf::from(".kedai"));
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let _guard = init_tracing(&data_dir.join("logs"), &args.log_filter)?;

    std::panic::set_hook(Box::new(|info| {
        ratatui::restore();
        let backtrace = std::backtrace::Backtrace::capture();
        let msg = info.to_string();
        eprintln!("!!! APPLICATION PANIC !!!\nMessage: {}\nBacktrace:\n{}", msg, backtrace);
        tracing::error!(target: "panic", message = %msg, backtrace = %backtrace, "panic occurred");
    }));

    tracing::info!(base_url = %args.base_url, data_dir = %data_dir.display(), "Kedai starting");

    let config = ClientConfig::new(&args.base_url).with_timeout(args.timeout);
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut app = App::new(config, &data_dir, tx.clone());
    app.validate_session();
    event::spawn_input_reader(tx);

    let mut terminal = ratatui::init();
    let result = app::run(&mut terminal, &mut app, &mut rx).await;
    ratatui::restore();
    result
}
