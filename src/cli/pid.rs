//! CLI handlers for PID inspection commands.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::CliOutputFormat;
use crate::error::Result;
use crate::output::Output;
use crate::services::pid as pid_service;
use crate::services::settings::Settings;

/// Output for `pid` - the validated PID and where it was read from
#[derive(Serialize)]
pub struct PidOutput {
    pub pid: i64,
    pub pid_file: PathBuf,
}

impl Output for PidOutput {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn to_text(&self) -> String {
        self.pid.to_string()
    }
}

/// Output for `pid-file` - the resolved path
#[derive(Serialize)]
pub struct PidFileOutput {
    pub pid_file: PathBuf,
}

impl Output for PidFileOutput {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn to_text(&self) -> String {
        self.pid_file.display().to_string()
    }
}

/// Handle `pid`: resolve the PID file, then read and validate its content.
///
/// Prints `-1` when no valid PID is known; that sentinel is the command's
/// only failure signal, matching the library contract.
pub fn pid(settings: &Settings, format: CliOutputFormat) -> Result<()> {
    let pid_file = pid_service::ftl_pid_file(settings);
    let pid = pid_service::ftl_pid(&pid_file);
    println!("{}", PidOutput { pid, pid_file }.format(format));
    Ok(())
}

/// Handle `pid-file`: print the resolved PID file path.
pub fn pid_file(settings: &Settings, format: CliOutputFormat) -> Result<()> {
    let pid_file = pid_service::ftl_pid_file(settings);
    println!("{}", PidFileOutput { pid_file }.format(format));
    Ok(())
}
