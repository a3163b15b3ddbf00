//! Signed-in session cache.
//!
//! Stores the signed-in user at ${QUILL_HOME}/session.json so that the CLI
//! and the TUI share one login.

use std::fs;
#[cfg(unix)]
use std::fs::OpenOptions;
#[cfg(unix)]
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quill_types::User;
use serde::{Deserialize, Serialize};

use crate::config::paths;

const SESSION_FILE: &str = "session.json";

/// Cached login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    /// RFC 3339 time of the login.
    pub signed_in_at: String,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            signed_in_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Returns the path to the session file.
pub fn session_path() -> PathBuf {
    paths::quill_home().join(SESSION_FILE)
}

/// Loads the session from the default path.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load() -> Result<Option<Session>> {
    load_from(&session_path())
}

/// Loads the session from a specific path. Returns `None` if absent.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_from(path: &Path) -> Result<Option<Session>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {}", path.display()))?;
    let session = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session from {}", path.display()))?;
    Ok(Some(session))
}

/// Saves the session to the default path.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn save(session: &Session) -> Result<()> {
    save_to(&session_path(), session)
}

/// Saves the session with restricted permissions (0600 on unix).
///
/// Writes a temp file next to `path` and renames it over the old session,
/// so a replaced file never keeps looser permissions.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn save_to(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(session).context("Failed to serialize session")?;
    let tmp_path = path.with_extension("json.tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&tmp_path)
            .with_context(|| format!("Failed to open {} for writing", tmp_path.display()))?;
        // A leftover temp file keeps its old mode on open.
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to restrict {}", tmp_path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write to {}", tmp_path.display()))?;
    }

    #[cfg(not(unix))]
    {
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write to {}", tmp_path.display()))?;
    }

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    tracing::info!(user = %session.user.username, "session saved");
    Ok(())
}

/// Removes the session at the default path.
///
/// # Errors
/// Returns an error if the file exists but cannot be removed.
pub fn clear() -> Result<bool> {
    clear_at(&session_path())
}

/// Removes the session file. Returns whether one existed.
///
/// # Errors
/// Returns an error if the file exists but cannot be removed.
pub fn clear_at(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    tracing::info!("session cleared");
    Ok(true)
}
