//! HTTP handlers for the server.

pub mod customization;
pub mod themes;
pub mod users;

use axum::http::StatusCode;

use crate::error::ClapperError;

/// Map a crate error onto a status and plain-text message.
pub(super) fn error_response(e: ClapperError) -> (StatusCode, String) {
    let status = match &e {
        ClapperError::UnknownTheme(_) => StatusCode::NOT_FOUND,
        ClapperError::InvalidUserId(_) => StatusCode::BAD_REQUEST,
        ClapperError::Storage(_)
        | ClapperError::Transport(_)
        | ClapperError::Serialization(_)
        | ClapperError::Io(_) => {
            tracing::error!(error = %e, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.to_string())
}
