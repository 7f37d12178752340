//! # Style Derivation
//!
//! Turns a resolved [`Customization`](crate::customization::Customization)
//! into [`StylePrimitives`]: concrete geometry, colour and spacing values a
//! document renderer can use without any further defaulting.
//!
//! ## Pipeline
//!
//! ```text
//! stored partial ──► resolve(defaults, partial) ──► Customization ──► derive() ──► StylePrimitives
//!                              ▲                         │
//!                              └──── apply_theme ◄───────┘
//! ```
//!
//! Derivation is a pure function. Every enumerated field is matched
//! exhaustively; `Other` values take the same branch as the plain variant
//! of that field (see the table on [`derive`]).

pub mod color;
mod derive;

pub use derive::derive;

use serde::{Deserialize, Serialize};

/// US Letter in points.
pub const PAGE_WIDTH_PT: f64 = 612.0;
pub const PAGE_HEIGHT_PT: f64 = 792.0;

/// Everything the renderer needs, fully resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePrimitives {
    pub page: PageStyle,
    pub text: TextStyle,
    /// `None` when the header section is hidden.
    pub header: Option<HeaderStyle>,
    pub card: CardStyle,
    pub divider: DividerStyle,
    pub spacing: SpacingStyle,
    /// Visible sections in render order.
    pub sections: Vec<SectionStyle>,
    pub contacts: ContactStyle,
    /// `None` unless urgency highlighting is on.
    pub urgency: Option<UrgencyStyle>,
    pub logo: Option<LogoStyle>,
    pub footer: Option<FooterStyle>,
    /// Accent colour at 10% opacity, for tinted backgrounds.
    pub accent_tint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOrientation {
    Portrait,
    Landscape,
}

/// Four-sided box, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// A solid line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub orientation: PageOrientation,
    pub width: f64,
    pub height: f64,
    pub padding: Edges,
    /// Page width minus horizontal padding. Not clamped.
    pub content_width: f64,
    pub background: String,
    pub font_family: String,
}

/// Size, weight and leading for one typographic role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRole {
    pub size: f64,
    /// Numeric weight, 300..=700.
    pub weight: u16,
    pub line_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub color: String,
    pub muted_color: String,
    pub title: TextRole,
    pub header: TextRole,
    pub body: TextRole,
    pub small: TextRole,
    pub caption: TextRole,
}

/// Fill behind the header block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HeaderFill {
    Gradient { from: String, to: String, angle: f64 },
    Solid { color: String },
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderStyle {
    pub fill: HeaderFill,
    pub text_color: String,
    pub align: TextAlign,
    pub padding: f64,
    pub corner_radius: f64,
    pub uppercase_title: bool,
    pub border_bottom: Option<Stroke>,
}

/// Drop shadow; `opacity` applies to black.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_y: f64,
    pub blur: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    pub border_width: f64,
    pub border_color: String,
    pub corner_radius: f64,
    pub padding: f64,
    pub shadow: Option<Shadow>,
    /// Cards sit on the per-section background instead of the page.
    pub tinted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerStyle {
    /// `None` means no rule is drawn.
    pub stroke: Option<Stroke>,
    /// Extra vertical space added around the divider.
    pub gap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingStyle {
    pub section_gap: f64,
    pub item_gap: f64,
    pub card_spacing: f64,
    pub line_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ProjectInfo,
    Schedule,
    Locations,
    Weather,
    Cast,
    Crew,
    EmergencyContacts,
    Notes,
}

impl SectionKind {
    /// Render order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::ProjectInfo,
        SectionKind::Schedule,
        SectionKind::Locations,
        SectionKind::Weather,
        SectionKind::Cast,
        SectionKind::Crew,
        SectionKind::EmergencyContacts,
        SectionKind::Notes,
    ];

    /// Icon name used when section icons are on.
    pub fn icon(self) -> &'static str {
        match self {
            SectionKind::ProjectInfo => "clapperboard",
            SectionKind::Schedule => "clock",
            SectionKind::Locations => "map-pin",
            SectionKind::Weather => "cloud-sun",
            SectionKind::Cast => "star",
            SectionKind::Crew => "users",
            SectionKind::EmergencyContacts => "phone",
            SectionKind::Notes => "file-text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    pub kind: SectionKind,
    pub title_background: String,
    pub title_color: String,
    pub text_color: String,
    pub background: String,
    pub border_color: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMode {
    Cards,
    Table,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStyle {
    pub mode: ContactMode,
    pub columns: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyStyle {
    pub color: String,
    pub background: String,
    pub border_width: f64,
    /// Badge text for elevated urgency, e.g. "RUSH".
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoStyle {
    pub url: String,
    pub align: TextAlign,
    pub max_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStyle {
    pub text: String,
    pub align: TextAlign,
    pub font_size: f64,
    pub color: String,
    pub show_page_numbers: bool,
    pub company_name: Option<String>,
    pub border_top: Option<Stroke>,
}
