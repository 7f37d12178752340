//! Theme Applier.

use super::IndustryTheme;
use crate::customization::{Customization, Layout, PartialSmart, ThemeInfo, UrgencyLevel};

/// Apply `theme` on top of `current`, producing a new customization.
///
/// - colours, visual treatment and theme metadata are replaced outright
/// - typography is merged one level deep, only fields the theme names change
/// - `layout.template` becomes the theme id, the rest of layout is kept
/// - smart defaults are merged into `smart`, other smart flags are kept
/// - department colour coding follows the theme's `departmentColors`, and
///   urgency highlighting is on for any urgency level other than standard
///
/// Branding, section visibility and the other formatting flags are kept.
pub fn apply_theme(current: &Customization, theme: &IndustryTheme) -> Customization {
    let defaults = &theme.smart_defaults;

    let mut sections = current.sections.clone();
    sections.formatting.department_color_coding = defaults.department_colors;
    sections.formatting.urgency_highlighting = defaults.urgency_level != UrgencyLevel::Standard;

    Customization {
        colors: theme.theme.colors.clone(),
        typography: current.typography.merged(&theme.theme.typography),
        layout: Layout {
            template: theme.id.clone(),
            ..current.layout.clone()
        },
        visual: theme.theme.visual.clone(),
        sections,
        branding: current.branding.clone(),
        smart: current.smart.merged(&PartialSmart::from(defaults)),
        theme: ThemeInfo {
            id: theme.id.clone(),
            name: theme.name.clone(),
            category: theme.category.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::*;
    use crate::theme::catalog;
    use pretty_assertions::assert_eq;

    fn theme(id: &str) -> IndustryTheme {
        catalog::by_id(id).unwrap()
    }

    #[test]
    fn test_colours_replaced_not_merged() {
        let mut current = default_customization();
        current.colors.primary = "#000000".to_string();

        let mut t = theme("feature-film");
        t.theme.colors.primary = "#ff0000".to_string();

        let out = apply_theme(&current, &t);
        assert_eq!(out.colors.primary, "#ff0000");
        assert_eq!(out.colors, t.theme.colors);
    }

    #[test]
    fn test_typography_merged_not_replaced() {
        let mut current = default_customization();
        current.typography.font_size.title = 18.0;
        current.typography.font_size.body = 10.0;

        let mut t = theme("television");
        t.theme.typography = PartialTypography {
            font_size: Some(PartialFontSizes {
                title: Some(24.0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let out = apply_theme(&current, &t);
        assert_eq!(out.typography.font_size.title, 24.0);
        assert_eq!(out.typography.font_size.body, 10.0);
        assert_eq!(out.typography.font_family, current.typography.font_family);
        assert_eq!(out.typography.font_weight, current.typography.font_weight);
    }

    #[test]
    fn test_layout_only_template_changes() {
        let mut current = default_customization();
        current.layout.margins.top = 72.0;
        current.layout.orientation = Orientation::Landscape;

        let out = apply_theme(&current, &theme("commercial"));
        assert_eq!(out.layout.template, "commercial");
        assert_eq!(out.layout.margins, current.layout.margins);
        assert_eq!(out.layout.spacing, current.layout.spacing);
        assert_eq!(out.layout.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_smart_defaults_merged() {
        let mut current = default_customization();
        current.smart.qr_codes = true;
        current.smart.weather_alerts = false;

        let t = theme("documentary");
        let out = apply_theme(&current, &t);

        assert_eq!(out.smart.production_type, t.smart_defaults.production_type);
        assert_eq!(out.smart.urgency_level, t.smart_defaults.urgency_level);
        assert_eq!(out.smart.union_compliant, t.smart_defaults.union_compliant);
        assert_eq!(out.smart.department_colors, t.smart_defaults.department_colors);
        assert!(out.smart.qr_codes);
        assert!(!out.smart.weather_alerts);
    }

    #[test]
    fn test_rush_turns_on_urgency_highlighting() {
        let mut t = theme("feature-film");
        t.smart_defaults.urgency_level = UrgencyLevel::Rush;
        let out = apply_theme(&default_customization(), &t);
        assert!(out.sections.formatting.urgency_highlighting);
    }

    #[test]
    fn test_standard_turns_off_urgency_highlighting() {
        let mut current = default_customization();
        current.sections.formatting.urgency_highlighting = true;

        let mut t = theme("feature-film");
        t.smart_defaults.urgency_level = UrgencyLevel::Standard;
        let out = apply_theme(&current, &t);
        assert!(!out.sections.formatting.urgency_highlighting);
    }

    #[test]
    fn test_department_coding_follows_theme() {
        let mut t = theme("documentary");
        t.smart_defaults.department_colors = false;
        let out = apply_theme(&default_customization(), &t);
        assert!(!out.sections.formatting.department_color_coding);

        t.smart_defaults.department_colors = true;
        let out = apply_theme(&out, &t);
        assert!(out.sections.formatting.department_color_coding);
    }

    #[test]
    fn test_other_sections_and_branding_kept() {
        let mut current = default_customization();
        current.sections.visibility.weather = false;
        current.sections.formatting.contact_layout = ContactLayout::Table;
        current.branding.company_name = Some("Northlight Pictures".to_string());

        let out = apply_theme(&current, &theme("music-video"));
        assert_eq!(out.sections.visibility, current.sections.visibility);
        assert_eq!(out.sections.formatting.contact_layout, ContactLayout::Table);
        assert_eq!(out.sections.formatting.show_section_icons, current.sections.formatting.show_section_icons);
        assert_eq!(out.branding, current.branding);
    }

    #[test]
    fn test_theme_metadata_recorded() {
        let t = theme("indie");
        let out = apply_theme(&default_customization(), &t);
        assert_eq!(out.theme.id, t.id);
        assert_eq!(out.theme.name, t.name);
        assert_eq!(out.theme.category, t.category);
    }

    #[test]
    fn test_apply_is_idempotent() {
        for t in catalog::built_in() {
            let once = apply_theme(&default_customization(), &t);
            let twice = apply_theme(&once, &t);
            assert_eq!(once, twice, "theme {} not idempotent", t.id);
        }
    }
}
