//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{inspect, resolve};

#[derive(Parser)]
#[command(name = "shadeplan")]
#[command(author, version, about = "Shaded-dependency conflict resolution for container image layers")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an artifact list into the ordered layer file list
    Resolve {
        /// JSON file with the resolved artifact list ('-' for stdin)
        input: String,

        /// Directory for placeholder archives (defaults to the system temp dir)
        #[arg(long, env = "SHADEPLAN_PLACEHOLDER_DIR")]
        placeholder_dir: Option<PathBuf>,
    },

    /// Print the shaded-dependency manifest embedded in an archive
    Inspect {
        /// Path to the jar/zip archive
        archive: PathBuf,
    },
}

/// Parses arguments and runs the selected command
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        Commands::Resolve {
            input,
            placeholder_dir,
        } => resolve::run(&output, &input, placeholder_dir),
        Commands::Inspect { archive } => inspect::run(&output, &archive),
    }
}
