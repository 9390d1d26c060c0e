use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldops", version, about = "Field crop record keeping CLI")]
pub struct Cli {
    /// Override the directory the CSV export is written to
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
