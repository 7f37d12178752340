//! # Clapper - Call Sheet Customization Engine
//!
//! Clapper owns the look of a production call sheet: which colors, fonts,
//! spacing, header and card treatments, section visibility and branding a
//! rendered PDF uses. It provides:
//!
//! - **Default table**: a complete customization every sheet starts from
//! - **Deep merge**: fill a sparse, user-edited customization from a base
//! - **Industry themes**: six built-in presets (film, TV, commercial, ...)
//! - **Style derivation**: turn a customization into renderer primitives
//! - **Settings**: per-user persistence and an HTTP API
//!
//! ## Quick Start
//!
//! ```
//! use clapper::{
//!     customization::{PartialColors, PartialCustomization, resolve_with_defaults},
//!     style::derive,
//!     theme::{apply_theme, catalog},
//! };
//!
//! // A user who only changed the accent color
//! let stored = PartialCustomization {
//!     colors: Some(PartialColors {
//!         accent: Some("#e11d48".to_string()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let custom = resolve_with_defaults(&stored);
//! assert_eq!(custom.colors.accent, "#e11d48");
//!
//! // Switch to the television theme, keeping branding
//! let tv = catalog::find("television")?;
//! let themed = apply_theme(&custom, &tv);
//! assert_eq!(themed.layout.template, "television");
//!
//! // Primitives for the PDF renderer
//! let styles = derive(&themed);
//! assert!(!styles.sections.is_empty());
//!
//! # Ok::<(), clapper::error::ClapperError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`customization`] | Customization model, default table, deep merge |
//! | [`theme`] | Industry theme catalog and theme application |
//! | [`style`] | Style derivation and color helpers |
//! | [`settings`] | Per-user storage and the current-customization session |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod customization;
pub mod error;
pub mod server;
pub mod settings;
pub mod style;
pub mod theme;

// Re-exports for convenience
pub use customization::{Customization, PartialCustomization, resolve};
pub use error::ClapperError;
pub use style::{StylePrimitives, derive};
pub use theme::{IndustryTheme, apply_theme};
