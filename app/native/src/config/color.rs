//! Hex color parsing.

use embedded_graphics::pixelcolor::Rgb888;

/// Parses `#RGB` or `#RRGGBB` (the `#` is optional).
///
/// # Errors
///
/// Returns an error message if the string is not a valid hex color.
pub fn parse_hex_color(value: &str) -> Result<Rgb888, String> {
    let hex = value.trim().trim_start_matches('#');

    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16).map_err(|_| format!("Invalid hex color: {value}"))
    };

    match hex.len() {
        3 if hex.is_ascii() => {
            let expand = |index: usize| channel(&hex[index..=index].repeat(2));
            Ok(Rgb888::new(expand(0)?, expand(1)?, expand(2)?))
        }
        6 if hex.is_ascii() => {
            Ok(Rgb888::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?))
        }
        _ => Err(format!("Invalid hex color: {value}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_color() {
        assert_eq!(parse_hex_color("#141E32").unwrap(), Rgb888::new(20, 30, 50));
        assert_eq!(parse_hex_color("78c8ff").unwrap(), Rgb888::new(120, 200, 255));
    }

    #[test]
    fn test_parse_three_digit_color() {
        assert_eq!(parse_hex_color("#fff").unwrap(), Rgb888::new(255, 255, 255));
        assert_eq!(parse_hex_color("#08f").unwrap(), Rgb888::new(0, 136, 255));
    }

    #[test]
    fn test_parse_invalid_color() {
        assert!(parse_hex_color("").is_err());
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
        assert!(parse_hex_color("#ééé").is_err());
    }
}
