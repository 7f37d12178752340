//! In-memory settings storage.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use super::{SettingsStorage, StoredSettings, validate_user_id};
use crate::customization::PartialCustomization;
use crate::error::ClapperError;

/// Settings kept in a map for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, StoredSettings>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with stored settings.
    ///
    /// Counts through a poisoned lock: a panicking writer never leaves the
    /// map half-updated, so the count is still accurate.
    pub fn len(&self) -> usize {
        match self.records.read() {
            Ok(records) => records.len(),
            Err(e) => e.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> ClapperError {
    ClapperError::Storage("settings lock poisoned".to_string())
}

impl SettingsStorage for MemoryStorage {
    fn load(&self, user_id: &str) -> Result<Option<StoredSettings>, ClapperError> {
        validate_user_id(user_id)?;
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(user_id).cloned())
    }

    fn save(
        &self,
        user_id: &str,
        customization: &PartialCustomization,
    ) -> Result<StoredSettings, ClapperError> {
        validate_user_id(user_id)?;
        let record = StoredSettings {
            user_id: user_id.to_string(),
            customization: customization.clone(),
            updated_at: Utc::now(),
        };
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(user_id.to_string(), record.clone());
        Ok(record)
    }

    fn delete(&self, user_id: &str) -> Result<bool, ClapperError> {
        validate_user_id(user_id)?;
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(records.remove(user_id).is_some())
    }
}
