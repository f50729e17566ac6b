use clap::Parser;
use std::process::ExitCode;

use ftlconf::cli::args::{Cli, Commands};
use ftlconf::cli::{config, file, pid};
use ftlconf::error::exit_codes;

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Log to stderr, quiet by default; `FTLCONF_LOG=debug` turns on detail.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FTLCONF_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> ftlconf::Result<()> {
    let format = cli.output_format();
    let settings = cli.settings();

    match cli.command {
        Commands::Config { action } => config::config(action, &settings, format),
        Commands::File { action } => file::file(action, format),
        Commands::Pid => pid::pid(&settings, format),
        Commands::PidFile => pid::pid_file(&settings, format),
    }
}
