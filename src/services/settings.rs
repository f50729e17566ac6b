//! Well-known paths and binary locations for the FTL daemon.
//!
//! Every path the tool touches is carried in [`Settings`] rather than read
//! from hardcoded constants at the call sites, so tests (and packagers with
//! non-standard layouts) can point the tool anywhere on the filesystem.
//! The CLI layers its `--ftl-binary`/`--ftl-config`/`--pid-file-default`
//! flags (each with an `FTLCONF_*` env fallback) on top of the defaults.

use std::path::PathBuf;

/// Name of the FTL binary, resolved through `PATH` unless overridden.
pub const DEFAULT_FTL_BINARY: &str = "pihole-FTL";

/// The daemon's own config file, consulted for a `PIDFILE=` override.
pub const DEFAULT_FTL_CONFIG: &str = "/etc/pihole/pihole-FTL.conf";

/// PID file location used when the daemon config does not name one.
pub const DEFAULT_PID_FILE: &str = "/run/pihole-FTL.pid";

/// Resolved locations of the FTL binary and its well-known files.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Binary invoked for `--config` reads and writes
    pub ftl_binary: PathBuf,
    /// Secondary config file scanned for `PIDFILE=`
    pub ftl_config_path: PathBuf,
    /// Fallback PID file path
    pub default_pid_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ftl_binary: PathBuf::from(DEFAULT_FTL_BINARY),
            ftl_config_path: PathBuf::from(DEFAULT_FTL_CONFIG),
            default_pid_file: PathBuf::from(DEFAULT_PID_FILE),
        }
    }
}
