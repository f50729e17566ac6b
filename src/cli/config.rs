//! CLI handlers for the FTL config proxy commands.
//!
//! These are thin wrappers: all key and value validation lives in the FTL
//! binary, reached through the [`ConfigBackend`] trait.

use crate::cli::args::{CliOutputFormat, ConfigAction};
use crate::error::Result;
use crate::ftl::{ConfigBackend, FtlClient};
use crate::output::Output;
use crate::services::settings::Settings;

/// Output for `config get` - the resolved value
pub struct ConfigGetOutput {
    pub key: String,
    pub value: String,
}

impl Output for ConfigGetOutput {
    fn to_json(&self) -> String {
        serde_json::json!({"key": &self.key, "value": &self.value}).to_string()
    }

    fn to_text(&self) -> String {
        self.value.clone()
    }
}

/// Output for `config set` - confirmation message
pub struct ConfigSetOutput {
    pub key: String,
    pub value: String,
}

impl Output for ConfigSetOutput {
    fn to_json(&self) -> String {
        serde_json::json!({"status": "set", "key": &self.key, "value": &self.value}).to_string()
    }

    fn to_text(&self) -> String {
        format!("Set {} = {}", self.key, self.value)
    }
}

/// Handle config subcommands
pub fn config(action: ConfigAction, settings: &Settings, format: CliOutputFormat) -> Result<()> {
    let client = FtlClient::new(settings);

    match action {
        ConfigAction::Get { key } => {
            let value = client.get(&key)?;
            println!("{}", ConfigGetOutput { key, value }.format(format));
        }
        ConfigAction::Set { key, value } => {
            client.set(&key, &value)?;
            println!("{}", ConfigSetOutput { key, value }.format(format));
        }
    }

    Ok(())
}
