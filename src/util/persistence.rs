//! Preference file handling. Only the [`PersistedState`] slice ever touches
//! disk; calculations are never written.

use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;

use crate::domain::app_state::PersistedState;

const PREFERENCES_FILENAME: &str = "preferences.json";

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("no writable config directory on this platform")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

fn preferences_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("com", "LandedCostPlanner", "LandedCostPlanner")?;
    Some(dirs.config_dir().join(PREFERENCES_FILENAME))
}

/// Read saved preferences. A missing or unreadable file starts the app with
/// defaults instead of failing.
pub fn load_persisted_state() -> Option<PersistedState> {
    let path = preferences_file()?;
    let data = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!(%err, path = %path.display(), "preferences file unreadable, using defaults");
            None
        }
    }
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = preferences_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(state)?)?;
    tracing::debug!(path = %path.display(), "saved preferences");
    Ok(())
}
