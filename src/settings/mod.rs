//! # Settings
//!
//! Per-user persistence of customizations and the in-process holder of
//! the "current customization".
//!
//! Stored records hold a [`PartialCustomization`]; whatever comes back is
//! always resolved against the Default Customization Table before use, so
//! records written by older versions (or by hand) with missing fields
//! still produce a complete customization.
//!
//! | Type | Use |
//! |------|-----|
//! | [`MemoryStorage`] | tests, servers without a settings directory |
//! | [`FileStorage`] | one JSON file per user in a directory |
//! | [`CustomizationSession`] | current value + reload on identity change |

mod file;
mod memory;
mod session;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use session::CustomizationSession;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customization::PartialCustomization;
use crate::error::ClapperError;

/// One user's persisted settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    pub user_id: String,
    pub customization: PartialCustomization,
    pub updated_at: DateTime<Utc>,
}

/// Persistence seam for per-user customizations.
///
/// Implementations are synchronous; async callers should run them on a
/// blocking thread.
pub trait SettingsStorage: Send + Sync {
    /// Fetch the stored record, `Ok(None)` if the user has none.
    fn load(&self, user_id: &str) -> Result<Option<StoredSettings>, ClapperError>;

    /// Replace the user's record.
    fn save(
        &self,
        user_id: &str,
        customization: &PartialCustomization,
    ) -> Result<StoredSettings, ClapperError>;

    /// Erase the user's record. Returns whether one existed.
    fn delete(&self, user_id: &str) -> Result<bool, ClapperError>;
}

/// User ids end up in file names and URLs; keep them boring.
pub fn validate_user_id(user_id: &str) -> Result<(), ClapperError> {
    let ok = !user_id.is_empty()
        && user_id.len() <= 128
        && !user_id.starts_with('.')
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'));
    if ok {
        Ok(())
    } else {
        Err(ClapperError::InvalidUserId(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("ada@northlight.film").is_ok());
        assert!(validate_user_id("user_42-b").is_ok());
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id("../etc/passwd").is_err());
        assert!(validate_user_id(".hidden").is_err());
        assert!(validate_user_id("a b").is_err());
    }
}
