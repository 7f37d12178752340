//! Stateless customization handlers: resolve, apply a theme, derive styles.
//!
//! Request bodies are sparse customizations and are always resolved
//! against the Default Customization Table first.

use axum::{Json, http::StatusCode};
use serde::Deserialize;

use super::error_response;
use crate::customization::{
    Customization, PartialCustomization, default_customization, resolve_with_defaults,
};
use crate::style::{StylePrimitives, derive};
use crate::theme::{self, catalog};

/// GET /api/customization/default - The Default Customization Table.
pub async fn default() -> Json<Customization> {
    Json(default_customization())
}

/// POST /api/customization/resolve - Fill a sparse customization from defaults.
pub async fn resolve(Json(custom): Json<PartialCustomization>) -> Json<Customization> {
    Json(resolve_with_defaults(&custom))
}

/// Request body for applying a theme.
#[derive(Debug, Deserialize)]
pub struct ApplyThemeRequest {
    /// Theme id from the catalog.
    pub theme: String,
    /// Customization to apply it to; defaults when omitted.
    #[serde(default)]
    pub customization: PartialCustomization,
}

/// POST /api/customization/apply-theme - Apply a catalog theme.
pub async fn apply_theme(
    Json(req): Json<ApplyThemeRequest>,
) -> Result<Json<Customization>, (StatusCode, String)> {
    let preset = catalog::find(&req.theme).map_err(error_response)?;
    let current = resolve_with_defaults(&req.customization);
    Ok(Json(theme::apply_theme(&current, &preset)))
}

/// POST /api/styles - Style primitives for a sparse customization.
pub async fn styles(Json(custom): Json<PartialCustomization>) -> Json<StylePrimitives> {
    Json(derive(&resolve_with_defaults(&custom)))
}
