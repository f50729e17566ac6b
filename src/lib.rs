//! ftlconf - config-file and PID helpers for the FTL daemon
//!
//! Small glue layer around three concerns: editing line-oriented
//! `key=value` files, resolving and reading the daemon's PID file, and
//! proxying config reads/writes to the daemon binary's `--config`
//! interface.

pub mod cli;
pub mod error;
pub mod ftl;
pub mod output;
pub mod services;

pub use error::{FtlConfError, Result};
