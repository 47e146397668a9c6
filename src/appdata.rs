//! # App Data Store
//!
//! Small JSON-file persistence for developer-defined add-in state.
//!
//! Commands live for the whole add-in session, but developers often want a
//! toggle or preference to survive host restarts. [`AppData`] wraps any
//! serde-serializable value with a file path: `load_or_default` reads the file
//! if it exists (falling back to `T::default()` otherwise) and `save` writes
//! it back. This holds developer state only; persistence of the host's UI
//! state is the host's own concern.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// App data persistence errors
#[derive(Debug, Error)]
pub enum AppDataError {
    #[error("failed to read app data from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write app data to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("app data at {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("app data could not be serialized: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// A serde-backed value tied to a JSON file on disk
#[derive(Debug)]
pub struct AppData<T> {
    path: PathBuf,
    value: T,
    last_saved: Option<DateTime<Utc>>,
}

impl<T> AppData<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Load app data from the given file, or start from `T::default()` if the
    /// file does not exist yet.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Result<Self, AppDataError> {
        let path = path.into();

        let value = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| AppDataError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| AppDataError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            debug!(path = %path.display(), "no app data file, starting from defaults");
            T::default()
        };

        Ok(Self {
            path,
            value,
            last_saved: None,
        })
    }

    /// Write the current value back to the file, creating parent directories
    /// as needed.
    pub fn save(&mut self) -> Result<(), AppDataError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| AppDataError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&self.value)
            .map_err(|source| AppDataError::Encode { source })?;
        fs::write(&self.path, json).map_err(|source| AppDataError::Write {
            path: self.path.clone(),
            source,
        })?;

        self.last_saved = Some(Utc::now());
        debug!(path = %self.path.display(), "app data saved");
        Ok(())
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the value was last written in this process, if ever
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }
}
