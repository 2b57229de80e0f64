//! Config CLI commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::cli::output::print_highlighted_json;
use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{self, config_paths};
use crate::error::NetlockError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    ///
    /// All options are commented out and show their defaults.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  netlock config init              # Create config at default location
  netlock config init --force      # Overwrite existing config
  netlock config init --path ./netlock.jsonc
  netlock config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Print the effective configuration as JSON.
    Show,

    /// Show the configuration file search paths and which one is in use.
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), NetlockError> {
    match cmd {
        ConfigCommands::Init { stdout: true, .. } => {
            println!("{}", generate_config_template());
            Ok(())
        }
        ConfigCommands::Init { force, path, .. } => {
            let path = path.clone().or_else(|| config_paths().into_iter().next());
            let path = path.unwrap_or_else(|| PathBuf::from("config.jsonc"));
            init_config(&path, *force)?;

            println!("Configuration file created at: {}", path.display());
            println!("\nAll options are commented out by default.");
            println!("Edit the file and uncomment the options you want to configure.");
            Ok(())
        }
        ConfigCommands::Show => {
            let value = serde_json::to_value(config::get_config())
                .map_err(|err| NetlockError::InvalidArguments(err.to_string()))?;
            print_highlighted_json(&value);
            Ok(())
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Writes the template to `path`, refusing to overwrite unless `force` is set.
fn init_config(path: &Path, force: bool) -> Result<(), NetlockError> {
    if path.exists() && !force {
        return Err(NetlockError::InvalidArguments(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            path.display()
        )));
    }

    create_config_file(path).map_err(|err| {
        NetlockError::InvalidArguments(format!(
            "Failed to create config file {}: {err}",
            path.display()
        ))
    })
}

fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let mut found_config = false;
    for (i, path) in config_paths().iter().enumerate() {
        let marker = match (path.exists(), found_config) {
            (true, false) => {
                found_config = true;
                " (active)"
            }
            (true, true) => " (exists)",
            (false, _) => "",
        };
        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if !found_config {
        println!("\nNo configuration file found, defaults are in use.");
        println!("Run 'netlock config init' to create one.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netlock").join("config.jsonc");

        init_config(&path, false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        std::fs::write(&path, "{ \"title\": \"mine\" }").unwrap();

        let err = init_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("mine"));

        init_config(&path, true).unwrap();
        assert!(!std::fs::read_to_string(&path).unwrap().contains("mine"));
    }
}
