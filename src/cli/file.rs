//! CLI handlers for line-oriented file edits.

use std::path::PathBuf;

use crate::cli::args::{CliOutputFormat, FileAction};
use crate::error::Result;
use crate::output::Output;
use crate::services::config_file;

/// Output for `file` subcommands - confirmation of the applied edit
pub struct FileEditOutput {
    pub verb: &'static str,
    pub file: PathBuf,
    pub key: String,
}

impl Output for FileEditOutput {
    fn to_json(&self) -> String {
        serde_json::json!({
            "status": self.verb.to_lowercase(),
            "file": self.file.display().to_string(),
            "key": &self.key,
        })
        .to_string()
    }

    fn to_text(&self) -> String {
        format!("{} {} in {}", self.verb, self.key, self.file.display())
    }
}

/// Handle file subcommands
pub fn file(action: FileAction, format: CliOutputFormat) -> Result<()> {
    let output = match action {
        FileAction::Set { file, key, value } => {
            config_file::upsert_key_value(&file, &key, &value)?;
            FileEditOutput {
                verb: "Set",
                file,
                key,
            }
        }
        FileAction::Add { file, key } => {
            config_file::add_key(&file, &key)?;
            FileEditOutput {
                verb: "Added",
                file,
                key,
            }
        }
        FileAction::Remove { file, key } => {
            config_file::remove_key(&file, &key)?;
            FileEditOutput {
                verb: "Removed",
                file,
                key,
            }
        }
    };

    println!("{}", output.format(format));
    Ok(())
}
