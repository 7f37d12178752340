//! # Industry Themes
//!
//! Named presets for a production category. A theme carries a complete
//! colour table and visual treatment, a sparse typography override, and
//! smart defaults for the production flags.
//!
//! ```
//! use clapper::customization::default_customization;
//! use clapper::theme::{apply_theme, catalog};
//!
//! let theme = catalog::by_id("documentary").unwrap();
//! let themed = apply_theme(&default_customization(), &theme);
//!
//! assert_eq!(themed.layout.template, "documentary");
//! assert_eq!(themed.colors, theme.theme.colors);
//! ```

mod apply;
pub mod catalog;

pub use apply::apply_theme;

use serde::{Deserialize, Serialize};

use crate::customization::{
    Colors, PartialSmart, PartialTypography, ProductionType, ThemeCategory, UrgencyLevel, Visual,
};

/// A named preset for one production category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryTheme {
    /// Stable identifier, also written to `layout.template` on apply.
    pub id: String,
    pub name: String,
    pub category: ThemeCategory,
    pub description: String,
    /// The look this theme imposes.
    pub theme: ThemePreset,
    pub smart_defaults: SmartDefaults,
}

/// Appearance carried by a theme.
///
/// Colours and visual treatment are complete and replace the current
/// value on apply. Typography is sparse and merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreset {
    pub colors: Colors,
    #[serde(default)]
    pub typography: PartialTypography,
    pub visual: Visual,
}

/// Suggested production flags, merged into `Customization::smart`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartDefaults {
    pub union_compliant: bool,
    pub department_colors: bool,
    pub urgency_level: UrgencyLevel,
    pub production_type: ProductionType,
}

impl From<&SmartDefaults> for PartialSmart {
    fn from(d: &SmartDefaults) -> Self {
        Self {
            production_type: Some(d.production_type.clone()),
            urgency_level: Some(d.urgency_level.clone()),
            union_compliant: Some(d.union_compliant),
            department_colors: Some(d.department_colors),
            ..Default::default()
        }
    }
}
