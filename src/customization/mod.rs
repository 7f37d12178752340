//! # Customization
//!
//! The configuration tree that controls how a call sheet looks when it is
//! exported: colours, typography, layout, visual treatment, section
//! visibility and formatting, branding, smart production flags and the
//! theme it came from.
//!
//! Two shapes exist for every group:
//!
//! - [`Customization`]: complete, every leaf populated. This is what the
//!   rest of the crate consumes.
//! - [`PartialCustomization`]: sparse, as stored per user or sent by an
//!   editor. Resolve it against a base with [`resolve`].
//!
//! ## Example
//!
//! ```
//! use clapper::customization::{PartialCustomization, default_customization, resolve};
//!
//! let custom: PartialCustomization =
//!     serde_json::from_str(r#"{"layout": {"margins": {"top": 50}}}"#).unwrap();
//! let resolved = resolve(&default_customization(), &custom);
//!
//! assert_eq!(resolved.layout.margins.top, 50.0);
//! assert_eq!(resolved.layout.margins.bottom, 40.0);
//! ```

#[macro_use]
mod macros;

mod defaults;
mod resolve;
mod types;
mod variants;

pub use defaults::{DEFAULT_THEME_ID, default_customization};
pub use resolve::{resolve, resolve_with_defaults};
pub use types::*;
pub use variants::*;
