//! Per-user customization handlers.
//!
//! Storage is synchronous, so every handler runs its session work on a
//! blocking thread.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::error_response;
use crate::customization::{Customization, PartialCustomization};
use crate::error::ClapperError;
use crate::server::AppState;
use crate::settings::{CustomizationSession, validate_user_id};
use crate::style::StylePrimitives;

/// How a handler opens the user's session.
#[derive(Debug, Clone, Copy)]
enum Access {
    /// Unreadable settings fall back to defaults.
    Read,
    /// Unreadable settings fail the request; nothing is written back.
    Write,
}

/// Open a session for `user` and run `f` with it off the async runtime.
async fn with_session<T, F>(
    state: Arc<AppState>,
    user: String,
    access: Access,
    f: F,
) -> Result<T, (StatusCode, String)>
where
    T: Send + 'static,
    F: FnOnce(&mut CustomizationSession) -> Result<T, ClapperError> + Send + 'static,
{
    validate_user_id(&user).map_err(error_response)?;

    let result = tokio::task::spawn_blocking(move || {
        let storage = state.storage.clone();
        let mut session = match access {
            Access::Read => CustomizationSession::for_user(storage, &user),
            Access::Write => CustomizationSession::open(storage, &user)?,
        };
        f(&mut session)
    })
    .await;

    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(error_response(e)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Task error: {}", e),
        )),
    }
}

/// GET /api/users/:user/customization - The user's resolved customization.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(user): Path<String>,
) -> Result<Json<Customization>, (StatusCode, String)> {
    with_session(state, user, Access::Read, |session| Ok(session.current().clone()))
        .await
        .map(Json)
}

/// PUT /api/users/:user/customization - Replace the user's settings.
///
/// The body is resolved against defaults, not against what was stored.
/// An unreadable stored record still fails the request; DELETE clears it.
pub async fn replace(
    State(state): State<Arc<AppState>>,
    Path(user): Path<String>,
    Json(custom): Json<PartialCustomization>,
) -> Result<Json<Customization>, (StatusCode, String)> {
    with_session(state, user, Access::Write, move |session| {
        session.reset();
        session.update(&custom);
        session.save()?;
        Ok(session.current().clone())
    })
    .await
    .map(Json)
}

/// PATCH /api/users/:user/customization - Merge changes into the user's settings.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(user): Path<String>,
    Json(changes): Json<PartialCustomization>,
) -> Result<Json<Customization>, (StatusCode, String)> {
    with_session(state, user, Access::Write, move |session| {
        session.update(&changes);
        session.save()?;
        Ok(session.current().clone())
    })
    .await
    .map(Json)
}

/// DELETE /api/users/:user/customization - Forget the user's settings.
///
/// 204 when a record was removed, 404 when there was none.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(user): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let existed = with_session(state, user, Access::Read, |session| session.forget()).await?;
    if existed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "No stored settings".to_string()))
    }
}

/// GET /api/users/:user/styles - Style primitives for the user's customization.
pub async fn styles(
    State(state): State<Arc<AppState>>,
    Path(user): Path<String>,
) -> Result<Json<StylePrimitives>, (StatusCode, String)> {
    with_session(state, user, Access::Read, |session| Ok(session.styles()))
        .await
        .map(Json)
}
