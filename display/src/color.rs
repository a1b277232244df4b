use sdl2::pixels::Color;

/// Parses a color name into an SDL2 color.
///
/// Accepts a handful of common names (case-insensitive) as well as
/// `#rrggbb` / `#rgb` hex notation.
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }
    let rgb = match name.as_str() {
        "black" => (0x00, 0x00, 0x00),
        "white" => (0xFF, 0xFF, 0xFF),
        "gray" | "grey" => (0x80, 0x80, 0x80),
        "red" => (0xFF, 0x00, 0x00),
        "green" => (0x00, 0x80, 0x00),
        "lime" => (0x00, 0xFF, 0x00),
        "blue" => (0x00, 0x00, 0xFF),
        "yellow" => (0xFF, 0xFF, 0x00),
        "cyan" => (0x00, 0xFF, 0xFF),
        "magenta" => (0xFF, 0x00, 0xFF),
        "orange" => (0xFF, 0xA5, 0x00),
        "purple" => (0x80, 0x00, 0x80),
        "amber" => (0xFF, 0xBF, 0x00),
        _ => return None,
    };
    Some(Color::RGB(rgb.0, rgb.1, rgb.2))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Color::RGB(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        // each digit is doubled: #f80 == #ff8800
        3 => Some(Color::RGB(
            channel(&hex[0..1])? * 0x11,
            channel(&hex[1..2])? * 0x11,
            channel(&hex[2..3])? * 0x11,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(parse_color("white"), Some(Color::RGB(255, 255, 255)));
        assert_eq!(parse_color(" Black "), Some(Color::RGB(0, 0, 0)));
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_hex() {
        assert_eq!(parse_color("#33ff00"), Some(Color::RGB(0x33, 0xFF, 0x00)));
        assert_eq!(parse_color("#f80"), Some(Color::RGB(0xFF, 0x88, 0x00)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gg0000"), None);
    }
}
