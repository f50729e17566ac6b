//! Process-spawning implementation of [`ConfigBackend`].

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::{FtlConfError, Result};
use crate::ftl::ConfigBackend;
use crate::services::settings::Settings;

/// Client for the FTL binary's `--config` interface.
///
/// Each call spawns the binary synchronously and blocks until it exits.
/// No validation happens on this side; keys and values are passed through
/// verbatim and the binary's exit status decides success.
pub struct FtlClient {
    binary: PathBuf,
}

impl FtlClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            binary: settings.ftl_binary.clone(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        debug!("Running {} --config {}", self.binary.display(), args.join(" "));
        let output = Command::new(&self.binary)
            .arg("--config")
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    FtlConfError::FtlBinaryNotFound(self.binary.display().to_string())
                }
                _ => FtlConfError::Io(e),
            })?;

        if !output.status.success() {
            return Err(FtlConfError::ConfigBackend {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

impl ConfigBackend for FtlClient {
    /// `<ftl> --config <key>`: the binary prints the resolved value on
    /// stdout. The trailing newline is stripped, nothing else is parsed.
    fn get(&self, key: &str) -> Result<String> {
        let output = self.run(&[key])?;
        let stdout =
            String::from_utf8(output.stdout).map_err(|_| FtlConfError::ConfigOutputNotUtf8)?;
        Ok(stdout.trim_end_matches('\n').to_string())
    }

    /// `<ftl> --config -q <key> <value>`: `-q` suppresses the value echo,
    /// so the exit status alone signals success.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.run(&["-q", key, value])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_maps_to_not_found() {
        let settings = Settings {
            ftl_binary: PathBuf::from("/nonexistent/pihole-FTL"),
            ..Settings::default()
        };
        let client = FtlClient::new(&settings);

        let err = client.get("dns.blocking.active").unwrap_err();
        assert!(matches!(err, FtlConfError::FtlBinaryNotFound(_)));

        let err = client.set("dns.blocking.active", "true").unwrap_err();
        assert!(matches!(err, FtlConfError::FtlBinaryNotFound(_)));
    }
}
