//! JSON writer: turns a [`Value`] tree back into text.
//!
//! Two layouts, selected by `spacing`:
//!
//! - **Compact** (`spacing == 0`): no whitespace at all, `{"a":[1,2]}`.
//! - **Pretty** (`spacing > 0`): one element or entry per line, indented by
//!   `spacing` spaces per nesting level, `": "` after keys, closing brackets on
//!   their own line at the parent's indentation. Empty containers stay `[]` / `{}`.
//!
//! Numbers use Rust's shortest round-trip formatting, so integral doubles print
//! without a decimal point (`3`, not `3.0`). Very large or very small magnitudes
//! switch to exponent form. Non-finite numbers have no JSON spelling and are
//! written as `null`.

use crate::value::Value;

/// Spacing used by `Display` and the CLI when none is given.
pub const DEFAULT_SPACING: usize = 2;

/// Append `value` to `dest`. `indent` is the nesting level of `value` itself;
/// children are written at `indent + 1`.
pub(crate) fn write_value(dest: &mut String, value: &Value, spacing: usize, indent: usize) {
    match value {
        Value::Null => dest.push_str("null"),
        Value::Bool(b) => dest.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(dest, *n),
        Value::String(s) => write_string(dest, s),
        Value::Array(arr) => {
            if arr.is_empty() {
                dest.push_str("[]");
                return;
            }
            dest.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    dest.push(',');
                }
                write_line_break(dest, spacing, indent + 1);
                write_value(dest, item, spacing, indent + 1);
            }
            write_line_break(dest, spacing, indent);
            dest.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                dest.push_str("{}");
                return;
            }
            dest.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    dest.push(',');
                }
                write_line_break(dest, spacing, indent + 1);
                write_string(dest, key);
                dest.push(':');
                if spacing > 0 {
                    dest.push(' ');
                }
                write_value(dest, item, spacing, indent + 1);
            }
            write_line_break(dest, spacing, indent);
            dest.push('}');
        }
    }
}

/// Newline plus `level * spacing` spaces; nothing in compact mode.
fn write_line_break(dest: &mut String, spacing: usize, level: usize) {
    if spacing == 0 {
        return;
    }
    dest.push('\n');
    write_indent(dest, level * spacing);
}

fn write_indent(dest: &mut String, count: usize) {
    dest.extend(std::iter::repeat_n(' ', count));
}

/// Format a double for JSON output.
///
/// - integral values below 1e21 → plain digits (`42`, `-7`)
/// - magnitudes ≥ 1e21 or < 1e-6 → exponent form (`1e21`, `1.5e-7`)
/// - everything else → shortest decimal that parses back to the same double
pub(crate) fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || (abs != 0.0 && abs < 1e-6) {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

fn write_number(dest: &mut String, n: f64) {
    dest.push_str(&format_number(n));
}

/// Write a quoted, escaped string literal.
fn write_string(dest: &mut String, s: &str) {
    dest.push('"');
    for ch in s.chars() {
        match escape_char(ch) {
            Some(escaped) => dest.push_str(escaped),
            None if (ch as u32) < 0x20 => dest.push_str(&format!("\\u{:04x}", ch as u32)),
            None => dest.push(ch),
        }
    }
    dest.push('"');
}

/// Short escape for characters that have one.
fn escape_char(ch: char) -> Option<&'static str> {
    match ch {
        '"' => Some("\\\""),
        '\\' => Some("\\\\"),
        '\u{08}' => Some("\\b"),
        '\u{0c}' => Some("\\f"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_have_no_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(9007199254740992.0), "9007199254740992");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn fractions_use_shortest_form() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-0.000001), "-0.000001");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn extreme_magnitudes_use_exponent() {
        assert_eq!(format_number(1e21), "1e21");
        assert_eq!(format_number(1.5e300), "1.5e300");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(5e-324), "5e-324");
    }

    #[test]
    fn non_finite_is_null() {
        assert_eq!(format_number(f64::NAN), "null");
        assert_eq!(format_number(f64::INFINITY), "null");
        assert_eq!(format_number(f64::NEG_INFINITY), "null");
    }

    #[test]
    fn control_characters_use_unicode_escape() {
        let mut out = String::new();
        write_string(&mut out, "a\u{01}\u{1f}\u{7f}");
        assert_eq!(out, "\"a\\u0001\\u001f\u{7f}\"");
    }

    #[test]
    fn slash_is_not_escaped() {
        let mut out = String::new();
        write_string(&mut out, "a/b");
        assert_eq!(out, "\"a/b\"");
    }
}
