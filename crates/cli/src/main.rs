//! Snapsort CLI - snapsort command

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod cmd;
mod report;

/// Snapsort - file a stream of timestamp-named files into a date archive
#[derive(Parser)]
#[command(name = "snapsort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the live watch and the one-shot sweep.
#[derive(Args)]
struct CommonArgs {
    /// Directory to take files from
    path: PathBuf,

    /// Archive root the year/month tree is created under
    /// (default: the configured archive directory name, resolved
    /// against the current directory)
    #[arg(long)]
    archive_root: Option<PathBuf>,

    /// Config file (TOML); flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch a directory and route new files as they appear
    Watch {
        #[command(flatten)]
        common: CommonArgs,

        /// Duplicate-suppression window in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Also watch subdirectories
        #[arg(long)]
        recursive: bool,
    },
    /// Route the files already present in a directory, then exit
    Sweep {
        #[command(flatten)]
        common: CommonArgs,

        /// Also sweep subdirectories
        #[arg(long)]
        recursive: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Watch {
            common,
            debounce_ms,
            recursive,
        } => cmd::watch::run(common, debounce_ms, recursive).await,
        Commands::Sweep { common, recursive } => cmd::sweep::run(common, recursive),
    }
}
