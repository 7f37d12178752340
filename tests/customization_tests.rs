//! # Customization Pipeline Tests
//!
//! End-to-end checks of the public pipeline:
//!
//! ```text
//! stored JSON ──► resolve ──► apply_theme ──► derive ──► StylePrimitives
//! ```
//!
//! Each test uses only the public API, the way the server and CLI do.

use clapper::customization::{
    Customization, FontSizes, HeaderBackground, PartialCustomization, PartialFontSizes,
    PartialLayout, PartialMargins, PartialTypography, UrgencyLevel, default_customization, resolve,
    resolve_with_defaults,
};
use clapper::style::{HeaderFill, derive};
use clapper::theme::{IndustryTheme, apply_theme, catalog};
use pretty_assertions::assert_eq;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn parse(json: &str) -> PartialCustomization {
    serde_json::from_str(json).expect("valid partial customization")
}

/// A catalog theme with the given urgency level.
fn theme_with_urgency(level: UrgencyLevel) -> IndustryTheme {
    let mut theme = catalog::find("documentary").unwrap();
    theme.smart_defaults.urgency_level = level;
    theme
}

// ============================================================================
// DEEP MERGE
// ============================================================================

#[test]
fn test_empty_override_yields_defaults() {
    let defaults = default_customization();
    assert_eq!(resolve(&defaults, &PartialCustomization::default()), defaults);
    assert_eq!(resolve(&defaults, &parse("{}")), defaults);
}

#[test]
fn test_leaf_override_wins_and_siblings_survive() {
    let mut defaults = default_customization();
    defaults.colors.primary = "#111111".to_string();

    let out = resolve(&defaults, &parse(r##"{"colors": {"primary": "#abcdef"}}"##));

    let mut expected = defaults.colors.clone();
    expected.primary = "#abcdef".to_string();
    assert_eq!(out.colors, expected);
    assert_eq!(out.typography, defaults.typography);
}

#[test]
fn test_nested_margin_override_is_non_destructive() {
    let defaults = default_customization();
    let out = resolve(&defaults, &parse(r#"{"layout": {"margins": {"top": 50}}}"#));

    assert_eq!(out.layout.margins.top, 50.0);
    assert_eq!(out.layout.margins.right, defaults.layout.margins.right);
    assert_eq!(out.layout.margins.bottom, defaults.layout.margins.bottom);
    assert_eq!(out.layout.margins.left, defaults.layout.margins.left);
    assert_eq!(out.layout.spacing, defaults.layout.spacing);
    assert_eq!(out.layout.template, defaults.layout.template);
}

#[test]
fn test_out_of_range_and_malformed_values_pass_through() {
    let custom = PartialCustomization {
        layout: Some(PartialLayout {
            margins: Some(PartialMargins {
                left: Some(500.0),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..parse(r#"{"colors": {"accent": "not-a-color"}, "visual": {"headerBackground": "plaid"}}"#)
    };

    let out = resolve_with_defaults(&custom);
    assert_eq!(out.layout.margins.left, 500.0);
    assert_eq!(out.colors.accent, "not-a-color");
    assert_eq!(
        out.visual.header_background,
        HeaderBackground::Other("plaid".to_string())
    );

    // Unknown variant survives a JSON round trip of the resolved value.
    let json = serde_json::to_string(&out).unwrap();
    let back: Customization = serde_json::from_str(&json).unwrap();
    assert_eq!(back, out);
}

#[test]
fn test_absent_branding_children_keep_base_values() {
    let base = resolve_with_defaults(&parse(
        r#"{"branding": {"footer": {"text": "Northlight Pictures"}}}"#,
    ));
    assert_eq!(
        base.branding.footer.as_ref().map(|f| f.text.as_str()),
        Some("Northlight Pictures")
    );

    let out = resolve(&base, &parse(r#"{"branding": {"companyName": "Northlight"}}"#));
    assert_eq!(out.branding.footer, base.branding.footer);
    assert_eq!(out.branding.logo, base.branding.logo);
    assert_eq!(out.branding.company_name.as_deref(), Some("Northlight"));
}

// ============================================================================
// THEME APPLICATION
// ============================================================================

#[test]
fn test_theme_colors_replace_and_typography_merges() {
    let mut current = default_customization();
    current.colors.primary = "#000000".to_string();
    current.typography.font_size = FontSizes {
        title: 18.0,
        body: 10.0,
        ..current.typography.font_size
    };

    let mut theme = catalog::find("feature-film").unwrap();
    theme.theme.colors.primary = "#ff0000".to_string();
    theme.theme.typography = PartialTypography {
        font_size: Some(PartialFontSizes {
            title: Some(24.0),
            ..Default::default()
        }),
        ..Default::default()
    };

    let out = apply_theme(&current, &theme);
    assert_eq!(out.colors.primary, "#ff0000");
    assert_eq!(out.colors, theme.theme.colors);
    assert_eq!(out.visual, theme.theme.visual);
    assert_eq!(out.typography.font_size.title, 24.0);
    assert_eq!(out.typography.font_size.body, 10.0);
    assert_eq!(out.typography.font_family, current.typography.font_family);
}

#[test]
fn test_theme_sets_template_and_keeps_other_layout() {
    let current = resolve_with_defaults(&parse(
        r#"{"layout": {"orientation": "landscape", "margins": {"top": 72}}}"#,
    ));

    for theme in catalog::built_in() {
        let out = apply_theme(&current, &theme);
        assert_eq!(out.layout.template, theme.id);
        assert_eq!(out.layout.orientation, current.layout.orientation);
        assert_eq!(out.layout.margins, current.layout.margins);
        assert_eq!(out.layout.spacing, current.layout.spacing);
        assert_eq!(out.theme.id, theme.id);
    }
}

#[test]
fn test_urgency_highlighting_follows_theme_urgency() {
    let current = default_customization();

    let rush = apply_theme(&current, &theme_with_urgency(UrgencyLevel::Rush));
    assert!(rush.sections.formatting.urgency_highlighting);

    let standard = apply_theme(&rush, &theme_with_urgency(UrgencyLevel::Standard));
    assert!(!standard.sections.formatting.urgency_highlighting);
}

#[test]
fn test_theme_preserves_visibility_and_branding() {
    let current = resolve_with_defaults(&parse(
        r#"{
            "sections": {"visibility": {"weather": false}, "formatting": {"showSectionIcons": true}},
            "branding": {"companyName": "Northlight"},
            "smart": {"weatherAlerts": true}
        }"#,
    ));

    let out = apply_theme(&current, &catalog::find("commercial").unwrap());
    assert_eq!(out.sections.visibility, current.sections.visibility);
    assert!(out.sections.formatting.show_section_icons);
    assert_eq!(out.branding, current.branding);
    assert!(out.smart.weather_alerts);
}

#[test]
fn test_applying_a_theme_twice_is_stable() {
    let current = resolve_with_defaults(&parse(r##"{"colors": {"accent": "#00ff00"}}"##));
    for theme in catalog::built_in() {
        let once = apply_theme(&current, &theme);
        assert_eq!(apply_theme(&once, &theme), once, "theme {}", theme.id);
    }
}

// ============================================================================
// STYLE DERIVATION
// ============================================================================

#[test]
fn test_every_header_background_has_a_fill() {
    let mut custom = default_customization();
    custom.visual.use_gradients = true;

    for variant in HeaderBackground::KNOWN {
        custom.visual.header_background = variant.clone();
        let header = derive(&custom).header.expect("header visible by default");
        match (variant, &header.fill) {
            (HeaderBackground::Gradient, HeaderFill::Gradient { .. }) => {}
            (HeaderBackground::Subtle, HeaderFill::Solid { .. }) => {}
            (HeaderBackground::None, HeaderFill::None) => {}
            (v, fill) => panic!("unexpected fill {:?} for {}", fill, v),
        }
    }
}

#[test]
fn test_unknown_header_background_falls_back_to_none() {
    let custom = resolve_with_defaults(&parse(r#"{"visual": {"headerBackground": "plaid"}}"#));
    let header = derive(&custom).header.unwrap();

    let mut plain = custom.clone();
    plain.visual.header_background = HeaderBackground::None;
    assert_eq!(header, derive(&plain).header.unwrap());
}

#[test]
fn test_derivation_is_deterministic() {
    let stored = parse(
        r##"{"colors": {"accent": "#e11d48"}, "visual": {"cardStyle": "elevated"}}"##,
    );
    let a = serde_json::to_vec(&derive(&resolve_with_defaults(&stored))).unwrap();
    let b = serde_json::to_vec(&derive(&resolve_with_defaults(&stored))).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_every_theme_derives() {
    let defaults = default_customization();
    for theme in catalog::built_in() {
        let styles = derive(&apply_theme(&defaults, &theme));
        assert!(!styles.sections.is_empty(), "theme {}", theme.id);
        assert_eq!(
            styles.urgency.is_some(),
            theme.smart_defaults.urgency_level != UrgencyLevel::Standard,
            "theme {}",
            theme.id
        );
    }
}
