mod cli;
mod config;
mod error;
mod logic;
mod models;
mod store;
mod ui;

use clap::Parser;
use cli::Cli;
use store::RecordStore;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; -v raises the default level
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let export_path = match config::export_path(cli.data_dir.as_ref()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let mut store = RecordStore::new();
    if let Err(e) = ui::menu::run(&mut store, &export_path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
