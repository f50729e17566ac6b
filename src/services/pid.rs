//! PID file resolution and validated PID reads for the FTL daemon.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::services::settings::Settings;

/// Sentinel meaning "no valid PID known".
pub const NO_PID: i64 = -1;

/// Resolve the daemon's PID file path.
///
/// Scans the daemon config file for the first `PIDFILE=` line and returns
/// its value. Falls back to the default path when the config file is
/// missing, empty, or carries no (non-empty) `PIDFILE=` entry. Resolution
/// never fails; there is always a path to report.
pub fn ftl_pid_file(settings: &Settings) -> PathBuf {
    if let Ok(content) = fs::read_to_string(&settings.ftl_config_path) {
        for line in content.lines() {
            if let Some(value) = line.strip_prefix("PIDFILE=") {
                let value = value.trim();
                if !value.is_empty() {
                    debug!(
                        "PID file {} set by {}",
                        value,
                        settings.ftl_config_path.display()
                    );
                    return PathBuf::from(value);
                }
            }
        }
    }

    settings.default_pid_file.clone()
}

/// Read the daemon PID from a PID file.
///
/// Returns [`NO_PID`] when the file is missing, unreadable, empty, or holds
/// anything but ASCII digits. The file content is never handed to callers
/// unvalidated: a PID file is attacker-writable in some deployments, and
/// the value returned here typically ends up in a signal call, so garbage
/// degrades to the sentinel instead of passing through.
pub fn ftl_pid(path: &Path) -> i64 {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return NO_PID,
    };

    let candidate = content.trim();
    if candidate.is_empty() {
        return NO_PID;
    }

    if !candidate.bytes().all(|b| b.is_ascii_digit()) {
        warn!(
            "Discarding non-numeric content of PID file {}",
            path.display()
        );
        return NO_PID;
    }

    // All-digit strings can still overflow; treat those as invalid too.
    candidate.parse().unwrap_or(NO_PID)
}
