//! CLI command definitions using Clap.
//!
//! - `config_cmd` - configuration file management

use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config::{self, schema};
use crate::error::NetlockError;
use crate::platform::{expand, open_path};
use crate::service::{self, ScheduleOverrides};

pub mod config_cmd;

pub use config_cmd::ConfigCommands;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// netlock - keeps the host's network configuration on the lock screen.
#[derive(Parser, Debug)]
#[command(name = "netlock")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Log debug output. `RUST_LOG` takes precedence.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Run the update service until interrupted (default).
    ///
    /// Renders and installs the background immediately, then refreshes it on
    /// the configured interval. Failed refreshes are retried sooner.
    Run(RunArgs),

    /// Render a single test image without installing it.
    #[command(after_long_help = r#"Examples:
  netlock render                      # Save to the desktop
  netlock render --output bg.png      # Save to a specific file
  netlock render --open               # Save and open in the image viewer"#)]
    Render {
        /// Output file. Defaults to `ip_background_test_<timestamp>.png` on the desktop.
        #[arg(long, short, value_name = "PATH")]
        output: Option<String>,

        /// Open the image after rendering.
        #[arg(long)]
        open: bool,
    },

    /// Configuration file management commands.
    ///
    /// Initialize, view, and locate the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output the configuration JSON Schema.
    ///
    /// Can be redirected to a file for use with editors that support JSON
    /// Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(netlock completions --shell zsh)"
    ///   netlock completions --shell fish > ~/.config/fish/completions/netlock.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

/// Options of the `run` command.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Seconds between refreshes, overriding the configuration.
    #[arg(long, value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Seconds before retrying a failed refresh, overriding the configuration.
    #[arg(long, value_name = "SECONDS")]
    pub retry_interval: Option<u64>,
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_deref().map(expand) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), NetlockError> {
        crate::logging::init(self.verbose);

        if let Some(path) = self.config_path() {
            if !path.exists() {
                return Err(NetlockError::InvalidArguments(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
        }

        match &self.command {
            None => Self::run(RunArgs::default()),
            Some(Commands::Run(args)) => Self::run(*args),
            Some(Commands::Render { output, open }) => Self::render(output.as_deref(), *open),
            Some(Commands::Config(cmd)) => config_cmd::execute(cmd),
            Some(Commands::Schema) => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }
            Some(Commands::Completions { shell }) => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    fn run(args: RunArgs) -> Result<(), NetlockError> {
        let config = config::init();
        config::create_default_config_file();

        let overrides = ScheduleOverrides {
            interval: args.interval,
            retry_interval: args.retry_interval,
        };
        service::run_service(config, &config::base_dir(), overrides)?;
        Ok(())
    }

    fn render(output: Option<&str>, open: bool) -> Result<(), NetlockError> {
        let config = config::init();
        let output = output.map_or_else(|| service::default_test_output(Local::now()), expand);

        service::render_once(config, &config::base_dir(), &output)?;
        println!("Test image saved to: {}", output.display());

        if open {
            open_path(&output)?;
        }
        Ok(())
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "netlock", &mut io::stdout());
    }
}
