//! Hex colour helpers.
//!
//! Colours are plain strings in the customization tree and are never
//! validated there. These helpers only transform values they can parse
//! (`#rgb` or `#rrggbb`); anything else is returned unchanged so that
//! malformed input reaches the renderer as given.

/// Parse `#rgb` or `#rrggbb` (either case) into RGB components.
pub fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let digits = s.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(rgb)
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some([r, g, b])
        }
        _ => None,
    }
}

/// Format RGB components as lowercase `#rrggbb`.
pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Append an alpha channel: `#rrggbbaa`, opacity clamped to 0.0..=1.0.
///
/// `with_alpha("#3b82f6", 0.1)` is `"#3b82f61a"`.
pub fn with_alpha(hex: &str, opacity: f64) -> String {
    match parse_hex(hex) {
        Some(rgb) => {
            let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("{}{:02x}", to_hex(rgb), alpha)
        }
        None => hex.to_string(),
    }
}

/// Linear blend of `a` towards `b`; `t = 0.0` is `a`, `t = 1.0` is `b`.
///
/// Falls back to `a` untouched when either side does not parse.
pub fn mix(a: &str, b: &str, t: f64) -> String {
    let (Some(from), Some(to)) = (parse_hex(a), parse_hex(b)) else {
        return a.to_string();
    };
    let t = t.clamp(0.0, 1.0);
    let channel = |i: usize| {
        let v = from[i] as f64 + (to[i] as f64 - from[i] as f64) * t;
        v.round() as u8
    };
    to_hex([channel(0), channel(1), channel(2)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!(parse_hex("#3b82f6"), Some([0x3b, 0x82, 0xf6]));
        assert_eq!(parse_hex("#3B82F6"), Some([0x3b, 0x82, 0xf6]));
        assert_eq!(parse_hex("#fff"), Some([255, 255, 255]));
        assert_eq!(parse_hex("#a1c"), Some([0xaa, 0x11, 0xcc]));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_hex("3b82f6"), None);
        assert_eq!(parse_hex("#3b82f"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
        assert_eq!(parse_hex("#3b82f6ff"), None);
        assert_eq!(parse_hex("red"), None);
    }

    #[test]
    fn test_with_alpha_ten_percent() {
        assert_eq!(with_alpha("#3b82f6", 0.1), "#3b82f61a");
        assert_eq!(with_alpha("#FFF", 1.0), "#ffffffff");
        assert_eq!(with_alpha("#000000", 0.0), "#00000000");
    }

    #[test]
    fn test_with_alpha_clamps_opacity() {
        assert_eq!(with_alpha("#000000", 2.0), "#000000ff");
        assert_eq!(with_alpha("#000000", -1.0), "#00000000");
    }

    #[test]
    fn test_with_alpha_passes_malformed_through() {
        assert_eq!(with_alpha("tomato", 0.1), "tomato");
        assert_eq!(with_alpha("", 0.5), "");
    }

    #[test]
    fn test_mix_endpoints_and_midpoint() {
        assert_eq!(mix("#000000", "#ffffff", 0.0), "#000000");
        assert_eq!(mix("#000000", "#ffffff", 1.0), "#ffffff");
        assert_eq!(mix("#000000", "#ffffff", 0.5), "#808080");
    }

    #[test]
    fn test_mix_falls_back_to_first_colour() {
        assert_eq!(mix("oops", "#ffffff", 0.5), "oops");
        assert_eq!(mix("#123456", "oops", 0.5), "#123456");
    }
}
