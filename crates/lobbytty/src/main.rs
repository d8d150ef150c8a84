use std::io;
use std::path::PathBuf;

use clap::Parser;
use lobbytty::app::App;
use lobbytty::domain::fixture::Fixtures;

#[derive(Parser)]
#[command(name = "lobbytty", version, about = "Terminal game-lobby browser")]
struct Cli {
    /// Fixture file overriding the embedded seed data.
    #[arg(long, value_name = "PATH")]
    fixtures: Option<PathBuf>,

    /// Log file location. Defaults to ~/.lobbytty/lobbytty.log.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_file)?;

    // Fixture problems must surface before the terminal enters raw mode.
    let fixtures = match &cli.fixtures {
        Some(path) => Fixtures::from_path(path),
        None => Fixtures::embedded(),
    }
    .map_err(|error| io::Error::other(format!("Error loading fixtures: {error}")))?;

    let mut app = App::new(fixtures);

    lobbytty::runtime::run(&mut app).await
}

/// Sets up file-based tracing. The TUI owns stdout, so logs always go to a
/// file.
fn init_tracing(log_file: Option<PathBuf>) -> io::Result<()> {
    let path = match log_file {
        Some(path) => path,
        None => {
            let base = dirs::home_dir().unwrap_or_else(std::env::temp_dir);
            let log_dir = base.join(".lobbytty");
            std::fs::create_dir_all(&log_dir)?;

            log_dir.join("lobbytty.log")
        }
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
