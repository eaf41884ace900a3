use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::app_state::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "NurseryPricing";
const APP_NAME: &str = "NurseryPricing";

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Loads saved defaults. `Ok(None)` means there is nothing saved yet and the
/// factory defaults apply.
pub fn load_persisted_state() -> Result<Option<PersistedState>, PersistLoadError> {
    let Some(path) = settings_path() else {
        return Ok(None);
    };
    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    decode_settings(&data).map(Some)
}

/// Parses the contents of a settings file.
pub fn decode_settings(data: &str) -> Result<PersistedState, PersistLoadError> {
    Ok(serde_json::from_str(data)?)
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = settings_path().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(&path, json)?;
    tracing::debug!("saved settings to {}", path.display());
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistLoadError {
    #[error("could not read saved settings: {0}")]
    Io(#[from] io::Error),
    #[error("saved settings are corrupt: {0}")]
    Corrupt(#[from] SerdeError),
}
