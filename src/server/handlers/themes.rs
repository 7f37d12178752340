//! Theme catalog handlers.

use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

use super::error_response;
use crate::customization::ThemeCategory;
use crate::theme::{IndustryTheme, catalog};

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    /// Only themes in this category ("film", "tv", ...).
    pub category: Option<String>,
}

/// GET /api/themes - List built-in themes, optionally by category.
pub async fn list(Query(query): Query<ThemeQuery>) -> Json<Vec<IndustryTheme>> {
    let themes = match query.category.as_deref() {
        Some(category) => catalog::by_category(&ThemeCategory::parse(category)),
        None => catalog::built_in(),
    };
    Json(themes)
}

/// GET /api/themes/:id - One built-in theme.
pub async fn get(Path(id): Path<String>) -> Result<Json<IndustryTheme>, (StatusCode, String)> {
    catalog::find(&id).map(Json).map_err(error_response)
}
