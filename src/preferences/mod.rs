//! Persisted user preferences.
//!
//! Preferences live in a small JSON object on disk. The core only reads and
//! writes `isOnboardingComplete`; keys written by other versions of the app
//! are carried through untouched.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to access preferences file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Preferences {
    #[serde(default)]
    is_onboarding_complete: bool,
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

/// Key-value preferences backed by a JSON file.
#[derive(Debug)]
pub struct PreferenceStore {
    path: Utf8PathBuf,
    values: Preferences,
}

impl PreferenceStore {
    /// Opens the store at `path`. A missing file yields default values; the
    /// file is only created on the first write.
    pub fn open(path: impl Into<Utf8PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Preferences::default()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Preferences::default()
        };

        Ok(PreferenceStore { path, values })
    }

    /// Opens the store, falling back to defaults if the file is unreadable.
    ///
    /// The broken file is left in place and overwritten on the next write.
    pub fn open_or_default(path: impl Into<Utf8PathBuf>) -> Self {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Ignoring unreadable preferences at {path}: {e}");
                PreferenceStore {
                    path,
                    values: Preferences::default(),
                }
            }
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn onboarding_complete(&self) -> bool {
        self.values.is_onboarding_complete
    }

    /// Updates the onboarding flag and writes the store to disk.
    pub fn set_onboarding_complete(&mut self, complete: bool) -> Result<(), PreferenceError> {
        self.values.is_onboarding_complete = complete;
        self.save()
    }

    fn save(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write next to the target and rename so a crash never leaves a
        // truncated file behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.values)?)?;
        fs::rename(&tmp, &self.path)?;

        log::debug!("Saved preferences to {}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_path(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap()
    }

    #[test]
    fn test_missing_file_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir, "prefs.json");

        let store = PreferenceStore::open(path.clone()).unwrap();
        assert!(!store.onboarding_complete());
        assert!(!path.exists());
    }

    #[test]
    fn test_flag_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir, "nested/dir/prefs.json");

        let mut store = PreferenceStore::open(path.clone()).unwrap();
        store.set_onboarding_complete(true).unwrap();
        assert!(path.exists());

        let reopened = PreferenceStore::open(path).unwrap();
        assert!(reopened.onboarding_complete());
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir, "prefs.json");
        fs::write(&path, r#"{"isOnboardingComplete": false, "theme": "dark"}"#).unwrap();

        let mut store = PreferenceStore::open(path.clone()).unwrap();
        store.set_onboarding_complete(true).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw["isOnboardingComplete"], true);
    }

    #[test]
    fn test_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir, "prefs.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            PreferenceStore::open(path.clone()),
            Err(PreferenceError::ParseError(_))
        ));

        let mut store = PreferenceStore::open_or_default(path.clone());
        assert!(!store.onboarding_complete());
        store.set_onboarding_complete(true).unwrap();
        assert!(PreferenceStore::open(path).unwrap().onboarding_complete());
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir, "prefs.json");
        fs::write(&path, "").unwrap();

        let store = PreferenceStore::open(path).unwrap();
        assert!(!store.onboarding_complete());
    }
}
