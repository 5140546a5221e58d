//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// pcert - Consolidate research project participation certificates.
#[derive(Debug, Parser)]
#[command(name = "pcert")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PCERT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (counts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract, consolidate and write a workbook (or CSV files)
    Export(ExportArgs),

    /// Extract and consolidate, then print the tables
    Preview(PreviewArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Certificate text files, or directories of `.txt` files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory (defaults to the configured one, then the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write one CSV file per table instead of a workbook
    #[arg(long)]
    pub csv: bool,
}

/// Arguments for the preview command.
#[derive(Debug, Parser)]
pub struct PreviewArgs {
    /// Certificate text files, or directories of `.txt` files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Which table to show
    #[arg(long, value_enum, default_value = "merged")]
    pub view: ViewArg,

    /// Only show rows of this person
    #[arg(short, long)]
    pub person: Option<String>,
}

/// Table selection for preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewArg {
    /// The project registry
    Projects,
    /// Participation rows as extracted
    Researchers,
    /// Participation rows with contiguous periods merged
    Merged,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file location
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
