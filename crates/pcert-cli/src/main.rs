//! pcert CLI - Consolidate research project participation certificates.

use clap::Parser;
use pcert_cli::cli::{ConfigAction, ConfigArgs};
use pcert_cli::commands;
use pcert_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> pcert_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let explicit = cli.config.as_deref();
    // Creating or locating the file must work before it exists
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. } | ConfigAction::Path,
        }) => Config::default(),
        _ => Config::load(explicit)?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Export(args) => commands::execute_export(args, &config, &formatter)?,
        Command::Preview(args) => commands::execute_preview(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, explicit, &formatter)?,
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
