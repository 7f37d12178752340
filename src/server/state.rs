//! Server state and configuration.

use std::path::PathBuf;
use std::sync::Arc;

use crate::settings::{FileStorage, MemoryStorage, SettingsStorage};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Directory for per-user settings files. `None` keeps settings in memory.
    pub settings_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            settings_dir: None,
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub storage: Arc<dyn SettingsStorage>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let storage: Arc<dyn SettingsStorage> = match &config.settings_dir {
            Some(dir) => Arc::new(FileStorage::new(dir.clone())),
            None => Arc::new(MemoryStorage::new()),
        };
        Self { config, storage }
    }

    /// State over an explicit storage backend.
    pub fn with_storage(config: ServerConfig, storage: Arc<dyn SettingsStorage>) -> Self {
        Self { config, storage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::PartialCustomization;

    #[test]
    fn test_settings_dir_selects_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(ServerConfig {
            settings_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        });

        state
            .storage
            .save("ada", &PartialCustomization::default())
            .unwrap();
        let settings_dir = state.config.settings_dir.as_deref().unwrap();
        assert!(settings_dir.join("ada.json").exists());
    }

    #[test]
    fn test_no_settings_dir_keeps_settings_in_memory() {
        let state = AppState::new(ServerConfig::default());
        assert!(state.config.settings_dir.is_none());

        state
            .storage
            .save("ada", &PartialCustomization::default())
            .unwrap();
        assert!(state.storage.load("ada").unwrap().is_some());
    }
}
