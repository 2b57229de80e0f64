//! CLI output formatting.

use colored::{ColoredString, Colorize};

/// Highlights pretty-printed JSON.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Punctuation: White
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut chars = json.chars().peekable();
    let mut open: Vec<char> = Vec::new();
    let mut expecting_value = false;

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let mut literal = String::from('"');
                let mut escaped = false;
                for next in chars.by_ref() {
                    literal.push(next);
                    if escaped {
                        escaped = false;
                    } else if next == '\\' {
                        escaped = true;
                    } else if next == '"' {
                        break;
                    }
                }
                let painted = if expecting_value { literal.green() } else { literal.cyan() };
                out.push_str(&painted.to_string());
            }
            ':' => {
                out.push_str(&":".white().to_string());
                expecting_value = true;
            }
            ',' | '{' | '}' | '[' | ']' => {
                match ch {
                    '{' | '[' => open.push(ch),
                    '}' | ']' => {
                        open.pop();
                    }
                    _ => {}
                }
                out.push_str(&ch.to_string().white().bold().to_string());
                // Array items are values, object members start with a key.
                expecting_value = open.last() == Some(&'[');
            }
            c if c.is_whitespace() => out.push(c),
            _ => {
                let mut scalar = String::from(ch);
                while let Some(&next) = chars.peek() {
                    if next == ',' || next == '}' || next == ']' || next.is_whitespace() {
                        break;
                    }
                    scalar.push(next);
                    chars.next();
                }
                out.push_str(&paint_scalar(&scalar).to_string());
            }
        }
    }

    out
}

fn paint_scalar(scalar: &str) -> ColoredString {
    match scalar {
        "true" | "false" | "null" => scalar.magenta(),
        _ if scalar.parse::<f64>().is_ok() => scalar.yellow(),
        _ => scalar.normal(),
    }
}

/// Prints a JSON value with syntax highlighting.
pub fn print_highlighted_json(value: &serde_json::Value) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{}", highlight_json(&json));
}
