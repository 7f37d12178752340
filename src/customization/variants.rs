//! Enumerated style choices.
//!
//! Each enum is a closed set of known strings plus `Other(String)`. The
//! `#[default]` variant is the plain choice that style derivation falls
//! back to when it meets an `Other` value.

style_variant! {
    /// Document font family.
    pub enum FontFamily {
        #[default]
        Inter = "inter",
        Helvetica = "helvetica",
        Roboto = "roboto",
        Times = "times",
        Georgia = "georgia",
        Courier = "courier",
    }
}

style_variant! {
    /// Font weight for one typographic role.
    pub enum FontWeight {
        Light = "light",
        #[default]
        Normal = "normal",
        Medium = "medium",
        Semibold = "semibold",
        Bold = "bold",
    }
}

style_variant! {
    /// Page orientation.
    pub enum Orientation {
        #[default]
        Portrait = "portrait",
        Landscape = "landscape",
    }
}

style_variant! {
    /// Horizontal alignment of the document header block.
    pub enum HeaderAlignment {
        #[default]
        Left = "left",
        Center = "center",
        Right = "right",
    }
}

style_variant! {
    /// Overall treatment of the document header.
    pub enum HeaderStyle {
        Modern = "modern",
        Classic = "classic",
        #[default]
        Minimal = "minimal",
        Bold = "bold",
    }
}

style_variant! {
    /// Fill behind the document header.
    pub enum HeaderBackground {
        Gradient = "gradient",
        Subtle = "subtle",
        #[default]
        None = "none",
    }
}

style_variant! {
    /// How section cards are drawn.
    pub enum CardStyle {
        Elevated = "elevated",
        Bordered = "bordered",
        #[default]
        Flat = "flat",
        Minimal = "minimal",
    }
}

style_variant! {
    /// Separator between document sections.
    pub enum SectionDividers {
        Line = "line",
        Thick = "thick",
        Space = "space",
        #[default]
        None = "none",
    }
}

style_variant! {
    /// Drop shadow strength for elevated cards.
    pub enum ShadowIntensity {
        #[default]
        None = "none",
        Subtle = "subtle",
        Medium = "medium",
        Strong = "strong",
    }
}

style_variant! {
    /// Layout of cast/crew/emergency contact entries.
    pub enum ContactLayout {
        Cards = "cards",
        Table = "table",
        #[default]
        List = "list",
    }
}

style_variant! {
    /// Placement of the production logo.
    pub enum LogoPosition {
        #[default]
        TopLeft = "top-left",
        TopCenter = "top-center",
        TopRight = "top-right",
    }
}

style_variant! {
    /// Rendered logo size.
    pub enum LogoSize {
        Small = "small",
        #[default]
        Medium = "medium",
        Large = "large",
    }
}

style_variant! {
    /// Footer content density.
    pub enum FooterStyle {
        #[default]
        Minimal = "minimal",
        Detailed = "detailed",
        Branded = "branded",
    }
}

style_variant! {
    /// Footer text alignment.
    pub enum FooterPosition {
        Left = "left",
        #[default]
        Center = "center",
        Right = "right",
    }
}

style_variant! {
    /// Kind of production the call sheet is for.
    pub enum ProductionType {
        #[default]
        Feature = "feature",
        Tv = "tv",
        Commercial = "commercial",
        Documentary = "documentary",
        MusicVideo = "music-video",
    }
}

style_variant! {
    /// Schedule pressure; anything above `standard` turns on urgency highlighting.
    pub enum UrgencyLevel {
        #[default]
        Standard = "standard",
        Priority = "priority",
        Rush = "rush",
    }
}

style_variant! {
    /// Industry category of a theme.
    pub enum ThemeCategory {
        #[default]
        Film = "film",
        Tv = "tv",
        Commercial = "commercial",
        Documentary = "documentary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_strings_parse() {
        assert_eq!(HeaderBackground::parse("gradient"), HeaderBackground::Gradient);
        assert_eq!(LogoPosition::parse("top-right"), LogoPosition::TopRight);
        assert_eq!(ProductionType::parse("music-video"), ProductionType::MusicVideo);
    }

    #[test]
    fn test_unknown_string_is_preserved() {
        let v = CardStyle::parse("glass");
        assert_eq!(v, CardStyle::Other("glass".to_string()));
        assert_eq!(v.as_str(), "glass");
        assert!(!v.is_known());
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&UrgencyLevel::Rush).unwrap();
        assert_eq!(json, "\"rush\"");

        let back: UrgencyLevel = serde_json::from_str("\"rush\"").unwrap();
        assert_eq!(back, UrgencyLevel::Rush);

        let odd: UrgencyLevel = serde_json::from_str("\"ASAP\"").unwrap();
        assert_eq!(serde_json::to_string(&odd).unwrap(), "\"ASAP\"");
    }

    #[test]
    fn test_known_lists_every_variant_once() {
        assert_eq!(HeaderBackground::KNOWN.len(), 3);
        assert!(HeaderBackground::KNOWN.iter().all(HeaderBackground::is_known));
        assert_eq!(FontWeight::KNOWN.len(), 5);
    }

    #[test]
    fn test_defaults_are_plain_variants() {
        assert_eq!(HeaderBackground::default(), HeaderBackground::None);
        assert_eq!(CardStyle::default(), CardStyle::Flat);
        assert_eq!(SectionDividers::default(), SectionDividers::None);
        assert_eq!(UrgencyLevel::default(), UrgencyLevel::Standard);
    }
}
