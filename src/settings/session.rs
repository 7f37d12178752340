//! The current customization for one signed-in user.

use std::sync::Arc;

use super::SettingsStorage;
use crate::customization::{Customization, PartialCustomization, default_customization, resolve};
use crate::error::ClapperError;
use crate::style::{StylePrimitives, derive};
use crate::theme::{apply_theme, catalog};

/// Holds the current customization and reloads it when the user changes.
///
/// Starts at the Default Customization Table. Every change produces a new
/// complete value; nothing is edited in place. Storage failures on load
/// fall back to defaults instead of surfacing.
pub struct CustomizationSession {
    storage: Arc<dyn SettingsStorage>,
    user_id: Option<String>,
    current: Customization,
}

impl CustomizationSession {
    pub fn new(storage: Arc<dyn SettingsStorage>) -> Self {
        Self {
            storage,
            user_id: None,
            current: default_customization(),
        }
    }

    /// Start already signed in as `user_id`.
    pub fn for_user(storage: Arc<dyn SettingsStorage>, user_id: &str) -> Self {
        let mut session = Self::new(storage);
        session.identity_changed(Some(user_id));
        session
    }

    /// Like [`for_user`](Self::for_user), but a failed load is returned
    /// instead of replaced by defaults. Use this before writing back, so an
    /// unreadable record is never overwritten.
    pub fn open(storage: Arc<dyn SettingsStorage>, user_id: &str) -> Result<Self, ClapperError> {
        let current = match storage.load(user_id)? {
            Some(record) => resolve(&default_customization(), &record.customization),
            None => default_customization(),
        };
        Ok(Self {
            storage,
            user_id: Some(user_id.to_string()),
            current,
        })
    }

    pub fn current(&self) -> &Customization {
        &self.current
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Sign-in / sign-out event. Reloads the stored settings for the new
    /// user, or resets to defaults when signed out or nothing is stored.
    pub fn identity_changed(&mut self, user_id: Option<&str>) -> &Customization {
        self.user_id = user_id.map(str::to_string);
        self.current = match user_id {
            None => default_customization(),
            Some(id) => match self.storage.load(id) {
                Ok(Some(record)) => {
                    tracing::debug!(user_id = id, updated_at = %record.updated_at, "restored customization");
                    resolve(&default_customization(), &record.customization)
                }
                Ok(None) => default_customization(),
                Err(e) => {
                    tracing::warn!(user_id = id, error = %e, "could not load customization, using defaults");
                    default_customization()
                }
            },
        };
        &self.current
    }

    /// Field-level edit: merge `changes` over the current value.
    pub fn update(&mut self, changes: &PartialCustomization) -> &Customization {
        self.current = resolve(&self.current, changes);
        &self.current
    }

    /// Apply a built-in theme by id.
    pub fn apply_theme(&mut self, theme_id: &str) -> Result<&Customization, ClapperError> {
        let theme = catalog::find(theme_id)?;
        self.current = apply_theme(&self.current, &theme);
        Ok(&self.current)
    }

    /// Back to the Default Customization Table (not persisted until `save`).
    pub fn reset(&mut self) -> &Customization {
        self.current = default_customization();
        &self.current
    }

    /// Persist the full current value for the signed-in user.
    pub fn save(&self) -> Result<(), ClapperError> {
        let user_id = self
            .user_id
            .as_deref()
            .ok_or_else(|| ClapperError::Storage("no signed-in user".to_string()))?;
        self.storage
            .save(user_id, &PartialCustomization::from(&self.current))?;
        Ok(())
    }

    /// Erase the signed-in user's stored settings and reset to defaults.
    pub fn forget(&mut self) -> Result<bool, ClapperError> {
        let user_id = self
            .user_id
            .as_deref()
            .ok_or_else(|| ClapperError::Storage("no signed-in user".to_string()))?;
        let existed = self.storage.delete(user_id)?;
        self.current = default_customization();
        Ok(existed)
    }

    /// Renderer primitives for the current value.
    pub fn styles(&self) -> StylePrimitives {
        derive(&self.current)
    }
}
