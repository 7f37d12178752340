//! # HTTP Server for Call Sheet Customization
//!
//! Exposes the theme catalog, the resolver, the theme applier, style
//! derivation and per-user settings as a JSON API for the editing UI and
//! the document renderer.
//!
//! ## Usage
//!
//! ```bash
//! clapper serve --listen 0.0.0.0:8080 --settings-dir ./settings
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Body → Response |
//! |--------|------|-----------------|
//! | GET | `/api/themes?category=` | → `[IndustryTheme]` |
//! | GET | `/api/themes/:id` | → `IndustryTheme` |
//! | GET | `/api/customization/default` | → `Customization` |
//! | POST | `/api/customization/resolve` | partial → `Customization` |
//! | POST | `/api/customization/apply-theme` | `{theme, customization?}` → `Customization` |
//! | POST | `/api/styles` | partial → `StylePrimitives` |
//! | GET/PUT/PATCH/DELETE | `/api/users/:user/customization` | per-user settings |
//! | GET | `/api/users/:user/styles` | → `StylePrimitives` |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::ClapperError;

/// Build the API router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Theme catalog
        .route("/api/themes", get(handlers::themes::list))
        .route("/api/themes/:id", get(handlers::themes::get))
        // Stateless customization API
        .route(
            "/api/customization/default",
            get(handlers::customization::default),
        )
        .route(
            "/api/customization/resolve",
            post(handlers::customization::resolve),
        )
        .route(
            "/api/customization/apply-theme",
            post(handlers::customization::apply_theme),
        )
        .route("/api/styles", post(handlers::customization::styles))
        // Per-user settings
        .route(
            "/api/users/:user/customization",
            get(handlers::users::get)
                .put(handlers::users::replace)
                .patch(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .route("/api/users/:user/styles", get(handlers::users::styles))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use clapper::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), clapper::error::ClapperError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     settings_dir: Some("./settings".into()),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ClapperError> {
    let app_state = Arc::new(AppState::new(config));
    let config = &app_state.config;

    match &config.settings_dir {
        Some(dir) => tracing::info!(dir = %dir.display(), "storing settings on disk"),
        None => tracing::warn!("no settings directory, user settings are kept in memory"),
    }

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            ClapperError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    tracing::info!(addr = %config.listen_addr, "clapper HTTP server listening");

    let app = router(app_state.clone());
    axum::serve(listener, app)
        .await
        .map_err(|e| ClapperError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
