//! The Default Customization Table.
//!
//! A fully populated customization that every merge starts from. Any
//! stored or edited settings are resolved against this value.

use super::types::*;
use super::variants::*;

/// Theme id recorded in the default table.
pub const DEFAULT_THEME_ID: &str = "professional";

/// The complete default customization.
pub fn default_customization() -> Customization {
    Customization {
        colors: default_colors(),
        typography: Typography {
            font_family: FontFamily::Inter,
            font_size: FontSizes {
                title: 24.0,
                header: 14.0,
                body: 10.0,
                small: 9.0,
                caption: 8.0,
            },
            font_weight: FontWeights {
                title: FontWeight::Bold,
                header: FontWeight::Semibold,
                body: FontWeight::Normal,
                small: FontWeight::Normal,
                caption: FontWeight::Light,
            },
            line_height: LineHeights {
                title: 1.2,
                header: 1.3,
                body: 1.4,
                small: 1.4,
                caption: 1.3,
            },
        },
        layout: Layout {
            orientation: Orientation::Portrait,
            header_alignment: HeaderAlignment::Left,
            header_style: HeaderStyle::Modern,
            margins: Margins {
                top: 40.0,
                right: 40.0,
                bottom: 40.0,
                left: 40.0,
            },
            spacing: Spacing {
                section_gap: 24.0,
                item_gap: 8.0,
                card_spacing: 16.0,
                line_height: 1.4,
            },
            template: DEFAULT_THEME_ID.to_string(),
        },
        visual: Visual {
            header_background: HeaderBackground::Gradient,
            card_style: CardStyle::Bordered,
            section_dividers: SectionDividers::Line,
            shadow_intensity: ShadowIntensity::Subtle,
            corner_radius: 8.0,
            use_gradients: true,
        },
        sections: Sections {
            visibility: SectionVisibility {
                header: true,
                project_info: true,
                schedule: true,
                locations: true,
                weather: true,
                cast: true,
                crew: true,
                emergency_contacts: true,
                notes: true,
            },
            formatting: SectionFormatting {
                department_color_coding: true,
                urgency_highlighting: false,
                contact_layout: ContactLayout::Cards,
                show_section_icons: true,
            },
        },
        branding: Branding {
            company_name: None,
            logo: None,
            footer: Some(Footer {
                text: "Confidential - for production use only".to_string(),
                style: FooterStyle::Minimal,
                position: FooterPosition::Center,
            }),
        },
        smart: Smart {
            production_type: ProductionType::Feature,
            urgency_level: UrgencyLevel::Standard,
            union_compliant: true,
            department_colors: true,
            weather_alerts: true,
            qr_codes: false,
        },
        theme: ThemeInfo {
            id: DEFAULT_THEME_ID.to_string(),
            name: "Professional".to_string(),
            category: ThemeCategory::Film,
        },
    }
}

fn default_colors() -> Colors {
    let c = |s: &str| s.to_string();
    Colors {
        primary: c("#1e293b"),
        secondary: c("#475569"),
        accent: c("#3b82f6"),
        text: c("#0f172a"),
        text_muted: c("#64748b"),
        background: c("#ffffff"),
        border: c("#e2e8f0"),
        header_background: c("#1e293b"),
        header_text: c("#ffffff"),
        section_header_background: c("#f1f5f9"),
        section_header_text: c("#1e293b"),
        cast_text: c("#1e3a8a"),
        cast_background: c("#eff6ff"),
        cast_border: c("#bfdbfe"),
        crew_text: c("#14532d"),
        crew_background: c("#f0fdf4"),
        crew_border: c("#bbf7d0"),
        schedule_text: c("#7c2d12"),
        schedule_background: c("#fff7ed"),
        schedule_border: c("#fed7aa"),
        locations_text: c("#581c87"),
        locations_background: c("#faf5ff"),
        locations_border: c("#e9d5ff"),
        emergency_text: c("#7f1d1d"),
        emergency_background: c("#fef2f2"),
        emergency_border: c("#fecaca"),
        notes_text: c("#334155"),
        notes_background: c("#f8fafc"),
        notes_border: c("#cbd5e1"),
        urgent: c("#dc2626"),
        warning: c("#f59e0b"),
        success: c("#16a34a"),
    }
}

impl Default for Customization {
    fn default() -> Self {
        default_customization()
    }
}
