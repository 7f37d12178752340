//! JSON file settings storage: `<dir>/<user_id>.json`.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;

use super::{SettingsStorage, StoredSettings, validate_user_id};
use crate::customization::PartialCustomization;
use crate::error::ClapperError;

/// One pretty-printed JSON file per user.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Store records under `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, user_id: &str) -> Result<PathBuf, ClapperError> {
        validate_user_id(user_id)?;
        Ok(self.dir.join(format!("{}.json", user_id)))
    }
}

impl SettingsStorage for FileStorage {
    fn load(&self, user_id: &str) -> Result<Option<StoredSettings>, ClapperError> {
        let path = self.path_for(user_id)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record = serde_json::from_slice(&bytes)?;
        tracing::debug!(user_id, path = %path.display(), "loaded settings");
        Ok(Some(record))
    }

    fn save(
        &self,
        user_id: &str,
        customization: &PartialCustomization,
    ) -> Result<StoredSettings, ClapperError> {
        let path = self.path_for(user_id)?;
        fs::create_dir_all(&self.dir)?;

        let record = StoredSettings {
            user_id: user_id.to_string(),
            customization: customization.clone(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_vec_pretty(&record)?;

        // Each save gets its own temp file beside the target, then renames
        // over it: readers never see half a file and the last save wins.
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        tracing::debug!(user_id, path = %path.display(), "saved settings");
        Ok(record)
    }

    fn delete(&self, user_id: &str) -> Result<bool, ClapperError> {
        let path = self.path_for(user_id)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(user_id, "deleted stored settings");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::{PartialLayout, PartialMargins};

    fn wide_margins() -> PartialCustomization {
        PartialCustomization {
            layout: Some(PartialLayout {
                margins: Some(PartialMargins {
                    left: Some(72.0),
                    right: Some(72.0),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("settings"));

        assert!(storage.load("ada").unwrap().is_none());
        let saved = storage.save("ada", &wide_margins()).unwrap();
        let loaded = storage.load("ada").unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert!(dir.path().join("settings/ada.json").exists());
    }

    #[test]
    fn test_file_is_sparse_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.save("ada", &wide_margins()).unwrap();

        let raw = fs::read_to_string(dir.path().join("ada.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["userId"], "ada");
        assert_eq!(json["customization"]["layout"]["margins"]["left"], 72.0);
        assert!(json["customization"]["layout"]["margins"].get("top").is_none());
        assert!(json["customization"].get("colors").is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ada.json"), b"{ not json").unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(matches!(
            storage.load("ada"),
            Err(ClapperError::Serialization(_))
        ));
    }

    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.save("ada", &wide_margins()).unwrap();
        assert!(storage.delete("ada").unwrap());
        assert!(!storage.delete("ada").unwrap());
        assert!(storage.load("ada").unwrap().is_none());
    }

    #[test]
    fn test_concurrent_saves_for_one_user() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        (0..50)
                            .map(|_| storage.save("ada", &wide_margins()))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            for handle in handles {
                for result in handle.join().unwrap() {
                    assert!(result.is_ok(), "save failed: {:?}", result.err());
                }
            }
        });

        let loaded = storage.load("ada").unwrap().unwrap();
        assert_eq!(loaded.customization, wide_margins());

        // Only the record itself is left behind.
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("ada.json")]);
    }

    #[test]
    fn test_path_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.load("../../etc/passwd").is_err());
    }
}
