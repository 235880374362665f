//! String literal escaping
//!
//! Output is meant to sit between double quotes in a language with C-style
//! escapes (TypeScript, JavaScript, C, Rust, ...).

use std::borrow::Cow;
use std::fmt::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which characters [`escape_literal`] rewrites
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeRules {
    /// Backslash and double quote only. Newlines, control characters and
    /// non-ASCII text pass through unchanged.
    #[default]
    Minimal,
    /// [`Minimal`](Self::Minimal) plus `\n`, `\r`, `\t`, the remaining C0
    /// controls and DEL as `\u00XX`, and U+2028/U+2029 as `\u2028`/`\u2029`.
    Extended,
}

impl FromStr for EscapeRules {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "extended" => Ok(Self::Extended),
            _ => Err(format!(
                "Invalid escape rules '{s}'. Valid values: minimal, extended"
            )),
        }
    }
}

/// Escape `text` for embedding inside a double-quoted literal.
///
/// Backslashes are doubled before quotes are escaped, so the `\` introduced
/// for a quote is never escaped again.
pub fn escape_literal(text: &str, rules: EscapeRules) -> Cow<'_, str> {
    match rules {
        EscapeRules::Minimal => {
            if text.contains(['\\', '"']) {
                Cow::Owned(text.replace('\\', "\\\\").replace('"', "\\\""))
            } else {
                Cow::Borrowed(text)
            }
        }
        EscapeRules::Extended => {
            if text.chars().any(needs_extended_escape) {
                Cow::Owned(escape_extended(text))
            } else {
                Cow::Borrowed(text)
            }
        }
    }
}

fn needs_extended_escape(c: char) -> bool {
    matches!(c, '\\' | '"' | '\u{2028}' | '\u{2029}') || c.is_ascii_control()
}

fn escape_extended(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_ascii_control() => {
                // Writing to a String cannot fail
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Parse the body of a C-style string literal (the part between quotes).
    fn unescape(body: &str) -> String {
        let mut out = String::new();
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                assert_ne!(c, '"', "unescaped quote in {body:?}");
                out.push(c);
                continue;
            }
            match chars.next().expect("dangling backslash") {
                '\\' => out.push('\\'),
                '"' => out.push('"'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => {
                    let hex: String = chars.by_ref().take(4).collect();
                    let code = u32::from_str_radix(&hex, 16).unwrap();
                    out.push(char::from_u32(code).unwrap());
                }
                other => panic!("unknown escape \\{other}"),
            }
        }
        out
    }

    #[test]
    fn test_minimal_quote_and_backslash() {
        assert_eq!(
            escape_literal("He said \"hi\"\n", EscapeRules::Minimal),
            "He said \\\"hi\\\"\n"
        );
        assert_eq!(escape_literal(r"C:\path", EscapeRules::Minimal), r"C:\\path");
        assert_eq!(escape_literal(r#"\""#, EscapeRules::Minimal), r#"\\\""#);
    }

    #[test]
    fn test_minimal_borrows_when_clean() {
        assert!(matches!(
            escape_literal("plain text", EscapeRules::Minimal),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_minimal_leaves_controls_and_unicode() {
        let text = "tab\there · naïve 日本語";
        assert_eq!(escape_literal(text, EscapeRules::Minimal), text);
    }

    #[test]
    fn test_extended_controls() {
        assert_eq!(
            escape_literal("a\nb\r\tc\u{7}\u{2028}", EscapeRules::Extended),
            "a\\nb\\r\\tc\\u0007\\u2028"
        );
        assert_eq!(escape_literal("naïve", EscapeRules::Extended), "naïve");
    }

    #[test]
    fn test_roundtrip_through_literal_parser() {
        let samples = [
            "",
            "plain",
            r#"quote " and backslash \"#,
            r"trailing backslash \",
            r#"\\"\\""#,
            "multi\nline\twith\u{1b}escape and \u{2029}",
            "unicode ✓ ß",
        ];
        for sample in samples {
            let escaped = escape_literal(sample, EscapeRules::Extended);
            assert_eq!(unescape(&escaped), sample);

            if !sample.chars().any(|c| c.is_control() || c == '\u{2029}') {
                let escaped = escape_literal(sample, EscapeRules::Minimal);
                assert_eq!(unescape(&escaped), sample);
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Extended".parse::<EscapeRules>(), Ok(EscapeRules::Extended));
        assert_eq!("minimal".parse::<EscapeRules>(), Ok(EscapeRules::Minimal));
        assert!("json".parse::<EscapeRules>().is_err());
    }
}
