//! CLI command definitions and argument parsing

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "ramarag")]
#[command(about = "Retrieval-augmented fact checking for statements about the Valmiki Ramayana")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the verse index from the dataset (full rebuild)
    Index {
        /// Path to the dataset CSV file
        #[arg(short, long, default_value = "RamayanDataSet.csv")]
        dataset: String,
        /// Output directory for the index (default: from config)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Verify statements against the indexed verses
    Check {
        /// Statement to verify; omit for an interactive session
        statement: Option<String>,
        /// Show the retrieved verses alongside the verdict
        #[arg(short, long)]
        sources: bool,
    },
    /// Show current configuration
    Config,
}
