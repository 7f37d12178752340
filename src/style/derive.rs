//! Customization → StylePrimitives.

use super::color::{mix, with_alpha};
use super::*;
use crate::customization::{self as c, Colors, Customization, FontWeight};

/// Derive the renderer-facing primitives from a resolved customization.
///
/// Fallbacks for unrecognised (`Other`) values:
///
/// | Field | Falls back to |
/// |-------|---------------|
/// | `typography.fontFamily` | `inter` |
/// | `typography.fontWeight.*` | `normal` (400) |
/// | `layout.orientation` | `portrait` |
/// | `layout.headerAlignment` | `left` |
/// | `layout.headerStyle` | `minimal` |
/// | `visual.headerBackground` | `none` |
/// | `visual.cardStyle` | `flat` |
/// | `visual.sectionDividers` | `none` |
/// | `visual.shadowIntensity` | `none` |
/// | `sections.formatting.contactLayout` | `list` |
/// | `branding.logo.position` / `size` | `top-left` / `medium` |
/// | `branding.footer.style` / `position` | `minimal` / `center` |
/// | `smart.urgencyLevel` | `standard` (no badge) |
pub fn derive(customization: &Customization) -> StylePrimitives {
    let colors = &customization.colors;
    let layout = &customization.layout;
    let formatting = &customization.sections.formatting;

    StylePrimitives {
        page: page_style(customization),
        text: text_style(customization),
        header: customization
            .sections
            .visibility
            .header
            .then(|| header_style(customization)),
        card: card_style(customization),
        divider: divider_style(customization),
        spacing: SpacingStyle {
            section_gap: layout.spacing.section_gap,
            item_gap: layout.spacing.item_gap,
            card_spacing: layout.spacing.card_spacing,
            line_height: layout.spacing.line_height,
        },
        sections: section_styles(customization),
        contacts: contact_style(&formatting.contact_layout),
        urgency: formatting
            .urgency_highlighting
            .then(|| urgency_style(colors, &customization.smart.urgency_level)),
        logo: customization.branding.logo.as_ref().and_then(logo_style),
        footer: customization
            .branding
            .footer
            .as_ref()
            .map(|footer| footer_style(footer, customization)),
        accent_tint: with_alpha(&colors.accent, 0.1),
    }
}

fn page_style(customization: &Customization) -> PageStyle {
    let margins = &customization.layout.margins;
    let (orientation, width, height) = match customization.layout.orientation {
        c::Orientation::Landscape => (PageOrientation::Landscape, PAGE_HEIGHT_PT, PAGE_WIDTH_PT),
        c::Orientation::Portrait | c::Orientation::Other(_) => {
            (PageOrientation::Portrait, PAGE_WIDTH_PT, PAGE_HEIGHT_PT)
        }
    };

    PageStyle {
        orientation,
        width,
        height,
        padding: Edges {
            top: margins.top,
            right: margins.right,
            bottom: margins.bottom,
            left: margins.left,
        },
        content_width: width - margins.left - margins.right,
        background: customization.colors.background.clone(),
        font_family: font_family_name(&customization.typography.font_family).to_string(),
    }
}

fn font_family_name(family: &c::FontFamily) -> &'static str {
    match family {
        c::FontFamily::Inter | c::FontFamily::Other(_) => "Inter",
        c::FontFamily::Helvetica => "Helvetica",
        c::FontFamily::Roboto => "Roboto",
        c::FontFamily::Times => "Times-Roman",
        c::FontFamily::Georgia => "Georgia",
        c::FontFamily::Courier => "Courier",
    }
}

fn font_weight_value(weight: &FontWeight) -> u16 {
    match weight {
        FontWeight::Light => 300,
        FontWeight::Normal | FontWeight::Other(_) => 400,
        FontWeight::Medium => 500,
        FontWeight::Semibold => 600,
        FontWeight::Bold => 700,
    }
}

fn text_style(customization: &Customization) -> TextStyle {
    let t = &customization.typography;
    let role = |size: f64, weight: &FontWeight, line_height: f64| TextRole {
        size,
        weight: font_weight_value(weight),
        line_height,
    };

    TextStyle {
        color: customization.colors.text.clone(),
        muted_color: customization.colors.text_muted.clone(),
        title: role(t.font_size.title, &t.font_weight.title, t.line_height.title),
        header: role(t.font_size.header, &t.font_weight.header, t.line_height.header),
        body: role(t.font_size.body, &t.font_weight.body, t.line_height.body),
        small: role(t.font_size.small, &t.font_weight.small, t.line_height.small),
        caption: role(t.font_size.caption, &t.font_weight.caption, t.line_height.caption),
    }
}

fn align(alignment: &c::HeaderAlignment) -> TextAlign {
    match alignment {
        c::HeaderAlignment::Left | c::HeaderAlignment::Other(_) => TextAlign::Left,
        c::HeaderAlignment::Center => TextAlign::Center,
        c::HeaderAlignment::Right => TextAlign::Right,
    }
}

fn header_fill(colors: &Colors, visual: &c::Visual) -> HeaderFill {
    match visual.header_background {
        c::HeaderBackground::Gradient if visual.use_gradients => HeaderFill::Gradient {
            from: colors.header_background.clone(),
            to: mix(&colors.header_background, &colors.accent, 0.35),
            angle: 135.0,
        },
        c::HeaderBackground::Gradient => HeaderFill::Solid {
            color: colors.header_background.clone(),
        },
        c::HeaderBackground::Subtle => HeaderFill::Solid {
            color: with_alpha(&colors.primary, 0.08),
        },
        c::HeaderBackground::None | c::HeaderBackground::Other(_) => HeaderFill::None,
    }
}

fn header_style(customization: &Customization) -> HeaderStyle {
    let colors = &customization.colors;
    let layout = &customization.layout;
    let fill = header_fill(colors, &customization.visual);

    // Light text only on the full-strength header colour.
    let text_color = match customization.visual.header_background {
        c::HeaderBackground::Gradient => colors.header_text.clone(),
        _ => colors.primary.clone(),
    };

    let (padding, uppercase_title, border_bottom) = match layout.header_style {
        c::HeaderStyle::Modern => (24.0, false, None),
        c::HeaderStyle::Classic => (
            16.0,
            true,
            Some(Stroke {
                width: 2.0,
                color: colors.primary.clone(),
            }),
        ),
        c::HeaderStyle::Minimal | c::HeaderStyle::Other(_) => (
            12.0,
            false,
            Some(Stroke {
                width: 1.0,
                color: colors.border.clone(),
            }),
        ),
        c::HeaderStyle::Bold => (28.0, true, None),
    };

    HeaderStyle {
        fill,
        text_color,
        align: align(&layout.header_alignment),
        padding,
        corner_radius: customization.visual.corner_radius,
        uppercase_title,
        border_bottom,
    }
}

fn shadow(intensity: &c::ShadowIntensity) -> Option<Shadow> {
    let (offset_y, blur, opacity) = match intensity {
        c::ShadowIntensity::None | c::ShadowIntensity::Other(_) => return None,
        c::ShadowIntensity::Subtle => (1.0, 2.0, 0.05),
        c::ShadowIntensity::Medium => (4.0, 6.0, 0.10),
        c::ShadowIntensity::Strong => (10.0, 15.0, 0.15),
    };
    Some(Shadow {
        offset_y,
        blur,
        opacity,
    })
}

fn card_style(customization: &Customization) -> CardStyle {
    let visual = &customization.visual;
    let padding = customization.layout.spacing.card_spacing;

    let (border_width, padding, shadow, tinted) = match visual.card_style {
        c::CardStyle::Elevated => (0.0, padding, shadow(&visual.shadow_intensity), false),
        c::CardStyle::Bordered => (1.0, padding, None, false),
        c::CardStyle::Flat | c::CardStyle::Other(_) => (0.0, padding, None, true),
        c::CardStyle::Minimal => (0.0, 0.0, None, false),
    };

    CardStyle {
        border_width,
        border_color: customization.colors.border.clone(),
        corner_radius: visual.corner_radius,
        padding,
        shadow,
        tinted,
    }
}

fn divider_style(customization: &Customization) -> DividerStyle {
    let colors = &customization.colors;
    match customization.visual.section_dividers {
        c::SectionDividers::Line => DividerStyle {
            stroke: Some(Stroke {
                width: 1.0,
                color: colors.border.clone(),
            }),
            gap: 0.0,
        },
        c::SectionDividers::Thick => DividerStyle {
            stroke: Some(Stroke {
                width: 3.0,
                color: colors.primary.clone(),
            }),
            gap: 0.0,
        },
        c::SectionDividers::Space => DividerStyle {
            stroke: None,
            gap: customization.layout.spacing.section_gap / 2.0,
        },
        c::SectionDividers::None | c::SectionDividers::Other(_) => DividerStyle {
            stroke: None,
            gap: 0.0,
        },
    }
}

fn is_visible(visibility: &c::SectionVisibility, kind: SectionKind) -> bool {
    match kind {
        SectionKind::ProjectInfo => visibility.project_info,
        SectionKind::Schedule => visibility.schedule,
        SectionKind::Locations => visibility.locations,
        SectionKind::Weather => visibility.weather,
        SectionKind::Cast => visibility.cast,
        SectionKind::Crew => visibility.crew,
        SectionKind::EmergencyContacts => visibility.emergency_contacts,
        SectionKind::Notes => visibility.notes,
    }
}

/// (text, background, border) for a section with department colours on.
fn department_colors(colors: &Colors, kind: SectionKind) -> (&str, &str, &str) {
    let (text, background, border) = match kind {
        SectionKind::ProjectInfo => (&colors.text, &colors.background, &colors.border),
        SectionKind::Schedule => (
            &colors.schedule_text,
            &colors.schedule_background,
            &colors.schedule_border,
        ),
        SectionKind::Locations | SectionKind::Weather => (
            &colors.locations_text,
            &colors.locations_background,
            &colors.locations_border,
        ),
        SectionKind::Cast => (&colors.cast_text, &colors.cast_background, &colors.cast_border),
        SectionKind::Crew => (&colors.crew_text, &colors.crew_background, &colors.crew_border),
        SectionKind::EmergencyContacts => (
            &colors.emergency_text,
            &colors.emergency_background,
            &colors.emergency_border,
        ),
        SectionKind::Notes => (&colors.notes_text, &colors.notes_background, &colors.notes_border),
    };
    (text.as_str(), background.as_str(), border.as_str())
}

fn section_styles(customization: &Customization) -> Vec<SectionStyle> {
    let colors = &customization.colors;
    let sections = &customization.sections;

    SectionKind::ALL
        .into_iter()
        .filter(|kind| is_visible(&sections.visibility, *kind))
        .map(|kind| {
            let (text, background, border) = if sections.formatting.department_color_coding {
                department_colors(colors, kind)
            } else {
                (
                    colors.text.as_str(),
                    colors.background.as_str(),
                    colors.border.as_str(),
                )
            };
            SectionStyle {
                kind,
                title_background: colors.section_header_background.clone(),
                title_color: colors.section_header_text.clone(),
                text_color: text.to_string(),
                background: background.to_string(),
                border_color: border.to_string(),
                icon: sections
                    .formatting
                    .show_section_icons
                    .then(|| kind.icon().to_string()),
            }
        })
        .collect()
}

fn contact_style(layout: &c::ContactLayout) -> ContactStyle {
    let (mode, columns) = match layout {
        c::ContactLayout::Cards => (ContactMode::Cards, 2),
        c::ContactLayout::Table => (ContactMode::Table, 1),
        c::ContactLayout::List | c::ContactLayout::Other(_) => (ContactMode::List, 1),
    };
    ContactStyle { mode, columns }
}

fn urgency_style(colors: &Colors, level: &c::UrgencyLevel) -> UrgencyStyle {
    let (border_width, badge) = match level {
        c::UrgencyLevel::Standard | c::UrgencyLevel::Other(_) => (2.0, None),
        c::UrgencyLevel::Priority => (2.0, Some("PRIORITY")),
        c::UrgencyLevel::Rush => (3.0, Some("RUSH")),
    };
    UrgencyStyle {
        color: colors.urgent.clone(),
        background: with_alpha(&colors.urgent, 0.1),
        border_width,
        badge: badge.map(str::to_string),
    }
}

fn logo_style(logo: &c::Logo) -> Option<LogoStyle> {
    if logo.url.is_empty() {
        return None;
    }
    let align = match logo.position {
        c::LogoPosition::TopLeft | c::LogoPosition::Other(_) => TextAlign::Left,
        c::LogoPosition::TopCenter => TextAlign::Center,
        c::LogoPosition::TopRight => TextAlign::Right,
    };
    let max_height = match logo.size {
        c::LogoSize::Small => 32.0,
        c::LogoSize::Medium | c::LogoSize::Other(_) => 48.0,
        c::LogoSize::Large => 64.0,
    };
    Some(LogoStyle {
        url: logo.url.clone(),
        align,
        max_height,
    })
}

fn footer_style(footer: &c::Footer, customization: &Customization) -> FooterStyle {
    let colors = &customization.colors;
    let align = match footer.position {
        c::FooterPosition::Left => TextAlign::Left,
        c::FooterPosition::Center | c::FooterPosition::Other(_) => TextAlign::Center,
        c::FooterPosition::Right => TextAlign::Right,
    };

    let (show_page_numbers, company_name, border_top) = match footer.style {
        c::FooterStyle::Minimal | c::FooterStyle::Other(_) => (false, None, None),
        c::FooterStyle::Detailed => (
            true,
            None,
            Some(Stroke {
                width: 1.0,
                color: colors.border.clone(),
            }),
        ),
        c::FooterStyle::Branded => (
            true,
            customization.branding.company_name.clone(),
            Some(Stroke {
                width: 2.0,
                color: colors.primary.clone(),
            }),
        ),
    };

    FooterStyle {
        text: footer.text.clone(),
        align,
        font_size: customization.typography.font_size.caption,
        color: colors.text_muted.clone(),
        show_page_numbers,
        company_name,
        border_top,
    }
}
