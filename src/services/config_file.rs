//! Line-oriented `key=value` config file editing.
//!
//! The files handled here (setupVars-style dotenv files) are ordered
//! sequences of lines, each either a bare token or a `key=value` pair.
//! Every editor rewrites the file in place and guarantees at most one line
//! for its target key afterwards. There is no locking and no atomic-rename
//! step; callers are responsible for serializing concurrent writers.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FtlConfError, Result};

/// Reject keys that would break the one-entry-per-line format.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.contains('=') || key.contains('\n') || key.contains('\r') {
        return Err(FtlConfError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Reject values that would spill onto additional lines.
fn validate_value(value: &str) -> Result<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(FtlConfError::InvalidValue(value.to_string()));
    }
    Ok(())
}

/// A line matches `key` iff it is exactly `key` or starts with `key=`.
///
/// Anchoring at the key boundary keeps `FOO` from matching `FOOBAR=...`.
fn matches_key(line: &str, key: &str) -> bool {
    match line.strip_prefix(key) {
        Some(rest) => rest.is_empty() || rest.starts_with('='),
        None => false,
    }
}

/// Read the file as lines, creating it empty when absent.
fn read_lines_or_create(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        fs::write(path, "")?;
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Write lines back in place, terminating non-empty files with a newline.
fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}

/// Insert or update a `key=value` line.
///
/// Creates the file if it does not exist. If one or more `key=` lines are
/// present they are rewritten to the new value (duplicates collapse to a
/// single line); otherwise the entry is appended. A bare `key` line without
/// `=` is not considered a match and is left untouched.
///
/// # Errors
///
/// Returns `InvalidKey`/`InvalidValue` for keys or values that cannot be
/// represented on a single line, and propagates I/O errors from the
/// underlying read/write.
pub fn upsert_key_value(path: &Path, key: &str, value: &str) -> Result<()> {
    validate_key(key)?;
    validate_value(value)?;

    let mut lines = read_lines_or_create(path)?;
    let entry = format!("{key}={value}");
    let prefix = format!("{key}=");

    if lines.iter().any(|line| line.starts_with(&prefix)) {
        let mut seen = false;
        lines.retain_mut(|line| {
            if line.starts_with(&prefix) {
                if seen {
                    return false;
                }
                seen = true;
                *line = entry.clone();
            }
            true
        });
        debug!("Updated {} in {}", key, path.display());
    } else {
        lines.push(entry);
        debug!("Appended {} to {}", key, path.display());
    }

    write_lines(path, &lines)
}

/// Insert a bare key line if no line for `key` exists yet.
///
/// Creates the file if it does not exist. Idempotent: a second call with
/// the same key leaves the file unchanged. An existing `key=value` line
/// counts as present and is not rewritten to a bare key.
pub fn add_key(path: &Path, key: &str) -> Result<()> {
    validate_key(key)?;

    let mut lines = read_lines_or_create(path)?;
    if lines.iter().any(|line| matches_key(line, key)) {
        return Ok(());
    }

    lines.push(key.to_string());
    debug!("Appended {} to {}", key, path.display());
    write_lines(path, &lines)
}

/// Delete every line for `key`, both bare `key` and `key=value` forms.
///
/// A missing file or an absent key is a no-op, not an error. Lines whose
/// key merely shares a prefix (`keyXYZ=...`) are kept.
pub fn remove_key(path: &Path, key: &str) -> Result<()> {
    validate_key(key)?;

    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let before = lines.len();
    lines.retain(|line| !matches_key(line, key));

    if lines.len() == before {
        return Ok(());
    }

    debug!(
        "Removed {} line(s) for {} from {}",
        before - lines.len(),
        key,
        path.display()
    );
    write_lines(path, &lines)
}
