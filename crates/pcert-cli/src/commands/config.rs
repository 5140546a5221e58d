//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `explicit` is the `--config` path, if one was given.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    explicit: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let path = Config::resolve_path(explicit)?;
            init_config(&path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
        ConfigAction::Path => {
            println!("{}", Config::resolve_path(explicit)?.display());
        }
    }

    Ok(())
}

/// Write the default configuration, refusing to overwrite unless forced.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(path)
}
