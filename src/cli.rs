// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::settings::DEFAULT_SETTINGS_PATH;

/// Command-line arguments for `snmpconf`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "snmpconf",
    version,
    about = "Validate and commit SNMP OID configuration.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the settings file (TOML).
    ///
    /// Default: `Snmpconf.toml` in the current working directory; a missing
    /// file just means defaults.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: String,

    /// Override the storage directory from the settings file.
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SNMPCONF_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the active configuration (provisioning the default if absent).
    Show,

    /// Evaluate and validate a candidate without committing it.
    Check {
        /// Path to the candidate file, or `-` to read from stdin.
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Validate a candidate and, on success, commit it atomically.
    Submit {
        /// Path to the candidate file, or `-` to read from stdin.
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print the backup slot (the text replaced by the last commit).
    Backup,

    /// Print the built-in default configuration template.
    Default,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
