//! RGBA color values for widget props.

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Default field background plate color.
    pub const LIGHT_GREY: Color = Color::rgb(211, 211, 211);
    /// Default selection highlight (`#7777ff`).
    pub const SELECTION: Color = Color::rgb(0x77, 0x77, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or a CSS-style color name.
    ///
    /// # Examples
    ///
    /// ```
    /// use widgets::Color;
    ///
    /// assert_eq!(Color::parse("#7777ff"), Some(Color::SELECTION));
    /// assert_eq!(Color::parse("lightgrey"), Some(Color::LIGHT_GREY));
    /// assert_eq!(Color::parse("not-a-color"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Color> {
        let s = value.trim().to_ascii_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 3 {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                return Some(Color::rgb(r, g, b));
            } else if hex.len() == 6 {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                return Some(Color::rgb(r, g, b));
            }
            return None;
        }

        let (r, g, b) = match s.as_str() {
            "black" => (0, 0, 0),
            "blue" => (0, 0, 255),
            "cyan" => (0, 255, 255),
            "gray" | "grey" => (128, 128, 128),
            "green" => (0, 128, 0),
            "lightgray" | "lightgrey" => (211, 211, 211),
            "magenta" => (255, 0, 255),
            "red" => (255, 0, 0),
            "silver" => (192, 192, 192),
            "white" => (255, 255, 255),
            "yellow" => (255, 255, 0),
            _ => return None,
        };
        Some(Color::rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_hex() {
        assert_eq!(Color::parse("#ff8000"), Some(Color::rgb(255, 128, 0)));
    }

    #[test]
    fn parses_shorthand_hex_by_doubling_digits() {
        assert_eq!(Color::parse("#f80"), Some(Color::rgb(255, 136, 0)));
    }

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!(Color::parse("  LightGrey "), Some(Color::LIGHT_GREY));
        assert_eq!(Color::parse("grey"), Color::parse("gray"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#zzz"), None);
        assert_eq!(Color::parse("chartreuse-ish"), None);
    }
}
