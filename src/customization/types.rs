//! The customization tree and its sparse override mirror.
//!
//! Flat groups come out of `leaf_group!`. Groups that contain other groups
//! (typography, layout, sections, branding and the root) are spelled out
//! here with their own `Partial*` type and `merged` method, so every level
//! of the merge is visible.

use serde::{Deserialize, Serialize};

use super::variants::*;

// ============================================================================
// COLORS
// ============================================================================

leaf_group! {
    /// Semantic colour roles. Values are hex strings and are not validated.
    pub struct Colors / PartialColors {
        pub primary: String,
        pub secondary: String,
        pub accent: String,
        pub text: String,
        pub text_muted: String,
        pub background: String,
        pub border: String,
        pub header_background: String,
        pub header_text: String,
        pub section_header_background: String,
        pub section_header_text: String,
        pub cast_text: String,
        pub cast_background: String,
        pub cast_border: String,
        pub crew_text: String,
        pub crew_background: String,
        pub crew_border: String,
        pub schedule_text: String,
        pub schedule_background: String,
        pub schedule_border: String,
        pub locations_text: String,
        pub locations_background: String,
        pub locations_border: String,
        pub emergency_text: String,
        pub emergency_background: String,
        pub emergency_border: String,
        pub notes_text: String,
        pub notes_background: String,
        pub notes_border: String,
        pub urgent: String,
        pub warning: String,
        pub success: String,
    }
}

// ============================================================================
// TYPOGRAPHY
// ============================================================================

leaf_group! {
    /// Font sizes in points, per typographic role.
    pub struct FontSizes / PartialFontSizes {
        pub title: f64,
        pub header: f64,
        pub body: f64,
        pub small: f64,
        pub caption: f64,
    }
}

leaf_group! {
    /// Font weights per typographic role.
    pub struct FontWeights / PartialFontWeights {
        pub title: FontWeight,
        pub header: FontWeight,
        pub body: FontWeight,
        pub small: FontWeight,
        pub caption: FontWeight,
    }
}

leaf_group! {
    /// Line height multipliers per typographic role.
    pub struct LineHeights / PartialLineHeights {
        pub title: f64,
        pub header: f64,
        pub body: f64,
        pub small: f64,
        pub caption: f64,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: FontFamily,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTypography {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<PartialFontSizes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<PartialFontWeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<PartialLineHeights>,
}

impl Typography {
    /// Merge one level into each role mapping instead of replacing it.
    pub fn merged(&self, over: &PartialTypography) -> Self {
        Self {
            font_family: over
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.clone()),
            font_size: merge_nested(&self.font_size, &over.font_size, FontSizes::merged),
            font_weight: merge_nested(&self.font_weight, &over.font_weight, FontWeights::merged),
            line_height: merge_nested(&self.line_height, &over.line_height, LineHeights::merged),
        }
    }
}

impl From<&Typography> for PartialTypography {
    fn from(full: &Typography) -> Self {
        Self {
            font_family: Some(full.font_family.clone()),
            font_size: Some((&full.font_size).into()),
            font_weight: Some((&full.font_weight).into()),
            line_height: Some((&full.line_height).into()),
        }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

leaf_group! {
    /// Page margins in px.
    pub struct Margins / PartialMargins {
        pub top: f64,
        pub right: f64,
        pub bottom: f64,
        pub left: f64,
    }
}

leaf_group! {
    /// Vertical rhythm. `line_height` is a multiplier, the rest are px.
    pub struct Spacing / PartialSpacing {
        pub section_gap: f64,
        pub item_gap: f64,
        pub card_spacing: f64,
        pub line_height: f64,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub orientation: Orientation,
    pub header_alignment: HeaderAlignment,
    pub header_style: HeaderStyle,
    pub margins: Margins,
    pub spacing: Spacing,
    /// Identifier of the template (theme id) the layout came from.
    pub template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_alignment: Option<HeaderAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_style: Option<HeaderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<PartialMargins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<PartialSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Layout {
    pub fn merged(&self, over: &PartialLayout) -> Self {
        Self {
            orientation: over
                .orientation
                .clone()
                .unwrap_or_else(|| self.orientation.clone()),
            header_alignment: over
                .header_alignment
                .clone()
                .unwrap_or_else(|| self.header_alignment.clone()),
            header_style: over
                .header_style
                .clone()
                .unwrap_or_else(|| self.header_style.clone()),
            margins: merge_nested(&self.margins, &over.margins, Margins::merged),
            spacing: merge_nested(&self.spacing, &over.spacing, Spacing::merged),
            template: over
                .template
                .clone()
                .unwrap_or_else(|| self.template.clone()),
        }
    }
}

impl From<&Layout> for PartialLayout {
    fn from(full: &Layout) -> Self {
        Self {
            orientation: Some(full.orientation.clone()),
            header_alignment: Some(full.header_alignment.clone()),
            header_style: Some(full.header_style.clone()),
            margins: Some((&full.margins).into()),
            spacing: Some((&full.spacing).into()),
            template: Some(full.template.clone()),
        }
    }
}

// ============================================================================
// VISUAL
// ============================================================================

leaf_group! {
    /// Visual treatment choices.
    pub struct Visual / PartialVisual {
        pub header_background: HeaderBackground,
        pub card_style: CardStyle,
        pub section_dividers: SectionDividers,
        pub shadow_intensity: ShadowIntensity,
        /// Corner radius in px.
        pub corner_radius: f64,
        pub use_gradients: bool,
    }
}

// ============================================================================
// SECTIONS
// ============================================================================

leaf_group! {
    /// Which call sheet sections are rendered.
    pub struct SectionVisibility / PartialSectionVisibility {
        pub header: bool,
        pub project_info: bool,
        pub schedule: bool,
        pub locations: bool,
        pub weather: bool,
        pub cast: bool,
        pub crew: bool,
        pub emergency_contacts: bool,
        pub notes: bool,
    }
}

leaf_group! {
    /// Per-section formatting switches.
    pub struct SectionFormatting / PartialSectionFormatting {
        pub department_color_coding: bool,
        pub urgency_highlighting: bool,
        pub contact_layout: ContactLayout,
        pub show_section_icons: bool,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub visibility: SectionVisibility,
    pub formatting: SectionFormatting,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialSections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<PartialSectionVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatting: Option<PartialSectionFormatting>,
}

impl Sections {
    pub fn merged(&self, over: &PartialSections) -> Self {
        Self {
            visibility: merge_nested(&self.visibility, &over.visibility, SectionVisibility::merged),
            formatting: merge_nested(&self.formatting, &over.formatting, SectionFormatting::merged),
        }
    }
}

impl From<&Sections> for PartialSections {
    fn from(full: &Sections) -> Self {
        Self {
            visibility: Some((&full.visibility).into()),
            formatting: Some((&full.formatting).into()),
        }
    }
}

// ============================================================================
// BRANDING
// ============================================================================

leaf_group! {
    /// Production logo. `url` is an image reference (URL or data URI).
    pub struct Logo / PartialLogo {
        pub url: String,
        pub position: LogoPosition,
        pub size: LogoSize,
    }
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            url: String::new(),
            position: LogoPosition::default(),
            size: LogoSize::default(),
        }
    }
}

leaf_group! {
    /// Page footer.
    pub struct Footer / PartialFooter {
        pub text: String,
        pub style: FooterStyle,
        pub position: FooterPosition,
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            text: String::new(),
            style: FooterStyle::default(),
            position: FooterPosition::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialBranding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<PartialLogo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<PartialFooter>,
}

impl Branding {
    /// Logo and footer are optional sub-objects. An absent override keeps
    /// the base value as it is (including `None`); a present override is
    /// merged onto the base, or onto an empty default when the base has none.
    pub fn merged(&self, over: &PartialBranding) -> Self {
        Self {
            company_name: over
                .company_name
                .clone()
                .or_else(|| self.company_name.clone()),
            logo: match &over.logo {
                Some(logo) => Some(self.logo.clone().unwrap_or_default().merged(logo)),
                None => self.logo.clone(),
            },
            footer: match &over.footer {
                Some(footer) => Some(self.footer.clone().unwrap_or_default().merged(footer)),
                None => self.footer.clone(),
            },
        }
    }
}

impl From<&Branding> for PartialBranding {
    fn from(full: &Branding) -> Self {
        Self {
            company_name: full.company_name.clone(),
            logo: full.logo.as_ref().map(Into::into),
            footer: full.footer.as_ref().map(Into::into),
        }
    }
}

// ============================================================================
// SMART FEATURES & THEME METADATA
// ============================================================================

leaf_group! {
    /// Production-aware switches. Themes seed the first four via smart defaults.
    pub struct Smart / PartialSmart {
        pub production_type: ProductionType,
        pub urgency_level: UrgencyLevel,
        pub union_compliant: bool,
        pub department_colors: bool,
        pub weather_alerts: bool,
        pub qr_codes: bool,
    }
}

leaf_group! {
    /// Which preset the current look came from.
    pub struct ThemeInfo / PartialThemeInfo {
        pub id: String,
        pub name: String,
        pub category: ThemeCategory,
    }
}

// ============================================================================
// ROOT
// ============================================================================

/// A complete customization. Every leaf is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    pub colors: Colors,
    pub typography: Typography,
    pub layout: Layout,
    pub visual: Visual,
    pub sections: Sections,
    pub branding: Branding,
    pub smart: Smart,
    pub theme: ThemeInfo,
}

/// A sparse customization, as persisted or as sent by an editor.
///
/// Any group or leaf may be missing; missing means "use the base value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<PartialColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<PartialTypography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<PartialLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual: Option<PartialVisual>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<PartialSections>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<PartialBranding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart: Option<PartialSmart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<PartialThemeInfo>,
}

impl PartialCustomization {
    /// True when nothing is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&Customization> for PartialCustomization {
    fn from(full: &Customization) -> Self {
        Self {
            colors: Some((&full.colors).into()),
            typography: Some((&full.typography).into()),
            layout: Some((&full.layout).into()),
            visual: Some((&full.visual).into()),
            sections: Some((&full.sections).into()),
            branding: Some((&full.branding).into()),
            smart: Some((&full.smart).into()),
            theme: Some((&full.theme).into()),
        }
    }
}

/// Merge an optional sub-group: recurse when present, clone the base otherwise.
pub(crate) fn merge_nested<T: Clone, P>(base: &T, over: &Option<P>, merge: fn(&T, &P) -> T) -> T {
    match over {
        Some(partial) => merge(base, partial),
        None => base.clone(),
    }
}
