//! Configuration interface of the external FTL daemon.
//!
//! The daemon owns its configuration: key validation, value parsing and
//! persistence all happen on its side of the `--config` CLI. This module
//! only defines the narrow seam ([`ConfigBackend`]) and the process-spawning
//! implementation behind it ([`FtlClient`]).

pub mod client;

pub use client::FtlClient;

use crate::error::Result;

/// Narrow interface to a daemon's key-value configuration.
///
/// Callers go through this trait rather than the concrete binary so the
/// proxy can be swapped out in tests.
pub trait ConfigBackend {
    /// Resolve a configuration key to its current value.
    fn get(&self, key: &str) -> Result<String>;

    /// Set a configuration key to a new value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
