use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::services::settings::Settings;

/// ftlconf - config-file and PID helpers for the FTL daemon
#[derive(Parser)]
#[command(name = "ftlconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: CliOutputFormat,

    /// JSON output (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// FTL binary invoked for config reads and writes
    #[arg(long, global = true, env = "FTLCONF_FTL_BINARY")]
    pub ftl_binary: Option<PathBuf>,

    /// FTL config file scanned for PIDFILE=
    #[arg(long, global = true, env = "FTLCONF_FTL_CONFIG")]
    pub ftl_config: Option<PathBuf>,

    /// PID file path used when the FTL config does not name one
    #[arg(long, global = true, env = "FTLCONF_PID_FILE")]
    pub pid_file_default: Option<PathBuf>,
}

impl Cli {
    pub fn output_format(&self) -> CliOutputFormat {
        if self.json {
            CliOutputFormat::Json
        } else {
            self.format
        }
    }

    /// Settings with CLI/env overrides applied on top of the defaults.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(binary) = &self.ftl_binary {
            settings.ftl_binary = binary.clone();
        }
        if let Some(config) = &self.ftl_config {
            settings.ftl_config_path = config.clone();
        }
        if let Some(pid_file) = &self.pid_file_default {
            settings.default_pid_file = pid_file.clone();
        }
        settings
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum CliOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read or write FTL runtime configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Edit a line-oriented key=value file
    File {
        #[command(subcommand)]
        action: FileAction,
    },

    /// Print the daemon PID (-1 when no valid PID is known)
    Pid,

    /// Print the resolved PID file path
    PidFile,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Resolve a config key via the FTL binary
    Get {
        /// Config key, e.g. dns.blocking.active
        key: String,
    },

    /// Set a config key via the FTL binary
    Set {
        /// Config key, e.g. dns.blocking.active
        key: String,

        /// New value; validated by the FTL binary, not by ftlconf
        value: String,
    },
}

#[derive(Subcommand)]
pub enum FileAction {
    /// Insert or update a key=value line
    Set {
        /// File to edit
        file: PathBuf,

        /// Key (must not contain '=')
        key: String,

        /// Value (single line)
        value: String,
    },

    /// Insert a bare key line if absent
    Add {
        /// File to edit
        file: PathBuf,

        /// Key (must not contain '=')
        key: String,
    },

    /// Delete every line for a key
    Remove {
        /// File to edit
        file: PathBuf,

        /// Key (must not contain '=')
        key: String,
    },
}
