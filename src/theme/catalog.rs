//! # Industry Theme Catalog
//!
//! The fixed set of built-in presets. Each theme's colour table is
//! expanded from a small [`Palette`] so every preset supplies all colour
//! roles (themes replace colours wholesale).
//!
//! | Id | Category | Urgency |
//! |----|----------|---------|
//! | `feature-film` | film | standard |
//! | `television` | tv | priority |
//! | `commercial` | commercial | rush |
//! | `documentary` | documentary | standard |
//! | `music-video` | commercial | rush |
//! | `indie` | film | standard |

use super::{IndustryTheme, SmartDefaults, ThemePreset};
use crate::customization::*;
use crate::error::ClapperError;
use crate::style::color::mix;

/// The handful of colours a theme is designed from.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub background: &'static str,
    pub urgent: &'static str,
}

impl Palette {
    /// Expand into a complete colour table.
    ///
    /// Section colours are tints of a per-section hue: primary for cast,
    /// secondary for crew, accent for schedule, a primary/accent blend for
    /// locations, the urgent colour for emergency contacts and muted text
    /// for notes.
    pub fn expand(&self) -> Colors {
        let text_muted = mix(self.text, self.background, 0.45);
        let section = |hue: &str| {
            (
                mix(hue, self.text, 0.3),
                mix(hue, self.background, 0.93),
                mix(hue, self.background, 0.7),
            )
        };
        let (cast_text, cast_background, cast_border) = section(self.primary);
        let (crew_text, crew_background, crew_border) = section(self.secondary);
        let (schedule_text, schedule_background, schedule_border) = section(self.accent);
        let (locations_text, locations_background, locations_border) =
            section(mix(self.primary, self.accent, 0.5).as_str());
        let (emergency_text, emergency_background, emergency_border) = section(self.urgent);
        let (notes_text, notes_background, notes_border) = section(text_muted.as_str());

        Colors {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            accent: self.accent.to_string(),
            text: self.text.to_string(),
            text_muted,
            background: self.background.to_string(),
            border: mix(self.secondary, self.background, 0.8),
            header_background: self.primary.to_string(),
            header_text: self.background.to_string(),
            section_header_background: mix(self.primary, self.background, 0.92),
            section_header_text: self.primary.to_string(),
            cast_text,
            cast_background,
            cast_border,
            crew_text,
            crew_background,
            crew_border,
            schedule_text,
            schedule_background,
            schedule_border,
            locations_text,
            locations_background,
            locations_border,
            emergency_text,
            emergency_background,
            emergency_border,
            notes_text,
            notes_background,
            notes_border,
            urgent: self.urgent.to_string(),
            warning: "#f59e0b".to_string(),
            success: "#16a34a".to_string(),
        }
    }
}

fn sizes(title: f64, header: f64) -> PartialFontSizes {
    PartialFontSizes {
        title: Some(title),
        header: Some(header),
        ..Default::default()
    }
}

/// Feature Film: dark, cinematic, gold accent.
pub fn feature_film() -> IndustryTheme {
    IndustryTheme {
        id: "feature-film".to_string(),
        name: "Feature Film".to_string(),
        category: ThemeCategory::Film,
        description: "Cinematic dark header with gold accents for studio features".to_string(),
        theme: ThemePreset {
            colors: Palette {
                primary: "#111827",
                secondary: "#374151",
                accent: "#d4a017",
                text: "#111827",
                background: "#ffffff",
                urgent: "#b91c1c",
            }
            .expand(),
            typography: PartialTypography {
                font_family: Some(FontFamily::Georgia),
                font_size: Some(sizes(26.0, 14.0)),
                ..Default::default()
            },
            visual: Visual {
                header_background: HeaderBackground::Gradient,
                card_style: CardStyle::Elevated,
                section_dividers: SectionDividers::Line,
                shadow_intensity: ShadowIntensity::Medium,
                corner_radius: 6.0,
                use_gradients: true,
            },
        },
        smart_defaults: SmartDefaults {
            union_compliant: true,
            department_colors: true,
            urgency_level: UrgencyLevel::Standard,
            production_type: ProductionType::Feature,
        },
    }
}

/// Television: clean blue, episodic schedules run at priority.
pub fn television() -> IndustryTheme {
    IndustryTheme {
        id: "television".to_string(),
        name: "Television Series".to_string(),
        category: ThemeCategory::Tv,
        description: "Crisp broadcast blues for episodic and multi-camera shoots".to_string(),
        theme: ThemePreset {
            colors: Palette {
                primary: "#1d4ed8",
                secondary: "#0f766e",
                accent: "#f97316",
                text: "#0f172a",
                background: "#ffffff",
                urgent: "#dc2626",
            }
            .expand(),
            typography: PartialTypography {
                font_family: Some(FontFamily::Helvetica),
                font_size: Some(sizes(22.0, 13.0)),
                ..Default::default()
            },
            visual: Visual {
                header_background: HeaderBackground::Subtle,
                card_style: CardStyle::Bordered,
                section_dividers: SectionDividers::Line,
                shadow_intensity: ShadowIntensity::Subtle,
                corner_radius: 8.0,
                use_gradients: false,
            },
        },
        smart_defaults: SmartDefaults {
            union_compliant: true,
            department_colors: true,
            urgency_level: UrgencyLevel::Priority,
            production_type: ProductionType::Tv,
        },
    }
}

/// Commercial: bold agency colours, short rush schedules.
pub fn commercial() -> IndustryTheme {
    IndustryTheme {
        id: "commercial".to_string(),
        name: "Commercial".to_string(),
        category: ThemeCategory::Commercial,
        description: "Bold agency palette for one and two day spots".to_string(),
        theme: ThemePreset {
            colors: Palette {
                primary: "#7c3aed",
                secondary: "#4338ca",
                accent: "#ec4899",
                text: "#1e1b4b",
                background: "#ffffff",
                urgent: "#e11d48",
            }
            .expand(),
            typography: PartialTypography {
                font_family: Some(FontFamily::Roboto),
                font_weight: Some(PartialFontWeights {
                    title: Some(FontWeight::Bold),
                    header: Some(FontWeight::Bold),
                    ..Default::default()
                }),
                ..Default::default()
            },
            visual: Visual {
                header_background: HeaderBackground::Gradient,
                card_style: CardStyle::Elevated,
                section_dividers: SectionDividers::Space,
                shadow_intensity: ShadowIntensity::Strong,
                corner_radius: 12.0,
                use_gradients: true,
            },
        },
        smart_defaults: SmartDefaults {
            union_compliant: true,
            department_colors: false,
            urgency_level: UrgencyLevel::Rush,
            production_type: ProductionType::Commercial,
        },
    }
}

/// Documentary: muted earth tones, small crews.
pub fn documentary() -> IndustryTheme {
    IndustryTheme {
        id: "documentary".to_string(),
        name: "Documentary".to_string(),
        category: ThemeCategory::Documentary,
        description: "Understated earth tones for small field crews".to_string(),
        theme: ThemePreset {
            colors: Palette {
                primary: "#365314",
                secondary: "#57534e",
                accent: "#ca8a04",
                text: "#1c1917",
                background: "#fffdf7",
                urgent: "#b91c1c",
            }
            .expand(),
            typography: PartialTypography {
                font_family: Some(FontFamily::Times),
                line_height: Some(PartialLineHeights {
                    body: Some(1.5),
                    ..Default::default()
                }),
                ..Default::default()
            },
            visual: Visual {
                header_background: HeaderBackground::None,
                card_style: CardStyle::Flat,
                section_dividers: SectionDividers::Space,
                shadow_intensity: ShadowIntensity::None,
                corner_radius: 4.0,
                use_gradients: false,
            },
        },
        smart_defaults: SmartDefaults {
            union_compliant: false,
            department_colors: false,
            urgency_level: UrgencyLevel::Standard,
            production_type: ProductionType::Documentary,
        },
    }
}

/// Music Video: high contrast, night-shoot friendly.
pub fn music_video() -> IndustryTheme {
    IndustryTheme {
        id: "music-video".to_string(),
        name: "Music Video".to_string(),
        category: ThemeCategory::Commercial,
        description: "High contrast neon accents for fast music video days".to_string(),
        theme: ThemePreset {
            colors: Palette {
                primary: "#18181b",
                secondary: "#3f3f46",
                accent: "#f43f5e",
                text: "#09090b",
                background: "#ffffff",
                urgent: "#f43f5e",
            }
            .expand(),
            typography: PartialTypography {
                font_size: Some(sizes(28.0, 15.0)),
                font_weight: Some(PartialFontWeights {
                    title: Some(FontWeight::Bold),
                    ..Default::default()
                }),
                ..Default::default()
            },
            visual: Visual {
                header_background: HeaderBackground::Gradient,
                card_style: CardStyle::Minimal,
                section_dividers: SectionDividers::Thick,
                shadow_intensity: ShadowIntensity::Medium,
                corner_radius: 16.0,
                use_gradients: true,
            },
        },
        smart_defaults: SmartDefaults {
            union_compliant: false,
            department_colors: true,
            urgency_level: UrgencyLevel::Rush,
            production_type: ProductionType::MusicVideo,
        },
    }
}

/// Independent Film: warm neutrals, lean on ink.
pub fn indie() -> IndustryTheme {
    IndustryTheme {
        id: "indie".to_string(),
        name: "Independent Film".to_string(),
        category: ThemeCategory::Film,
        description: "Warm neutrals that print well on office black and white".to_string(),
        theme: ThemePreset {
            colors: Palette {
                primary: "#44403c",
                secondary: "#78716c",
                accent: "#0d9488",
                text: "#1c1917",
                background: "#ffffff",
                urgent: "#dc2626",
            }
            .expand(),
            typography: PartialTypography::default(),
            visual: Visual {
                header_background: HeaderBackground::Subtle,
                card_style: CardStyle::Bordered,
                section_dividers: SectionDividers::Line,
                shadow_intensity: ShadowIntensity::None,
                corner_radius: 4.0,
                use_gradients: false,
            },
        },
        smart_defaults: SmartDefaults {
            union_compliant: false,
            department_colors: true,
            urgency_level: UrgencyLevel::Standard,
            production_type: ProductionType::Feature,
        },
    }
}

/// All built-in themes, in display order.
pub fn built_in() -> Vec<IndustryTheme> {
    vec![
        feature_film(),
        television(),
        commercial(),
        documentary(),
        music_video(),
        indie(),
    ]
}

/// Look up a built-in theme by id.
pub fn by_id(id: &str) -> Option<IndustryTheme> {
    built_in().into_iter().find(|t| t.id == id)
}

/// Look up a built-in theme by id, failing with [`ClapperError::UnknownTheme`].
pub fn find(id: &str) -> Result<IndustryTheme, ClapperError> {
    by_id(id).ok_or_else(|| ClapperError::UnknownTheme(id.to_string()))
}

/// Built-in themes in one category.
pub fn by_category(category: &ThemeCategory) -> Vec<IndustryTheme> {
    built_in()
        .into_iter()
        .filter(|t| &t.category == category)
        .collect()
}

/// Ids of all built-in themes.
pub fn list_ids() -> Vec<String> {
    built_in().into_iter().map(|t| t.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::color::parse_hex;

    #[test]
    fn test_ids_unique() {
        let mut ids = list_ids();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 6);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(by_id("television").unwrap().category, ThemeCategory::Tv);
        assert!(by_id("western").is_none());
        assert!(matches!(find("western"), Err(ClapperError::UnknownTheme(id)) if id == "western"));
    }

    #[test]
    fn test_by_category() {
        let film: Vec<String> = by_category(&ThemeCategory::Film)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(film, vec!["feature-film", "indie"]);
        assert_eq!(by_category(&ThemeCategory::Documentary).len(), 1);
    }

    #[test]
    fn test_every_expanded_colour_is_valid_hex() {
        for theme in built_in() {
            let json = serde_json::to_value(&theme.theme.colors).unwrap();
            for (role, value) in json.as_object().unwrap() {
                let value = value.as_str().unwrap();
                assert!(parse_hex(value).is_some(), "{}: {} = {}", theme.id, role, value);
            }
        }
    }

    #[test]
    fn test_expand_keeps_palette_roles() {
        let palette = Palette {
            primary: "#111111",
            secondary: "#222222",
            accent: "#333333",
            text: "#000000",
            background: "#ffffff",
            urgent: "#ff0000",
        };
        let colors = palette.expand();
        assert_eq!(colors.primary, "#111111");
        assert_eq!(colors.header_background, "#111111");
        assert_eq!(colors.header_text, "#ffffff");
        assert_eq!(colors.urgent, "#ff0000");
    }

    #[test]
    fn test_theme_json_round_trip_keeps_shape() {
        let theme = commercial();
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["smartDefaults"]["urgencyLevel"], "rush");
        assert_eq!(json["theme"]["visual"]["cardStyle"], "elevated");
        let back: IndustryTheme = serde_json::from_value(json).unwrap();
        assert_eq!(back, theme);
    }
}
