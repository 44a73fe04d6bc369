//! Query string tokenizer and value parsers.
//!
//! Minimal percent-decoding and key-value extraction without external
//! dependencies.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::color::parse_color;
use super::options::ScreenParams;
use crate::fit::{FitMode, XAlign, YAlign};

/// Known non-layout keys preserved in `extras` without warnings.
/// Sorted for binary search.
const KNOWN_EXTRAS: &[&str] = &["cursor", "debug", "locale", "refresh", "theme", "title"];

/// Parse a screen configuration query string into parameters + warnings.
pub(crate) fn parse_query(query: &str) -> (ScreenParams, Vec<ParseWarning>) {
    let mut params = ScreenParams::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(&raw_key);
        let value = percent_decode(&raw_value);
        let key_lower = ascii_lowercase(&key);

        dispatch_key(&key_lower, &value, &mut params, &mut warnings);
    }

    (params, warnings)
}

fn dispatch_key(
    key: &str,
    value: &str,
    params: &mut ScreenParams,
    warnings: &mut Vec<ParseWarning>,
) {
    match key {
        // Design resolution
        "w" | "width" => set_or_warn(&mut params.w, parse_u32(value), key, value, warnings),
        "h" | "height" => set_or_warn(&mut params.h, parse_u32(value), key, value, warnings),

        // Fit mode
        "mode" => {
            if let Some(m) = parse_fit_mode(value) {
                set_or_warn(&mut params.mode, Some(m), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "mode",
                    value: String::from(value),
                    reason: "expected contain|cover",
                });
            }
        }

        // Alignment
        "x" | "xalign" => {
            if let Some(a) = parse_x_align(value) {
                set_or_warn(&mut params.x_align, Some(a), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: leak_key(key),
                    value: String::from(value),
                    reason: "expected left|center|right",
                });
            }
        }
        "y" | "yalign" => {
            if let Some(a) = parse_y_align(value) {
                set_or_warn(&mut params.y_align, Some(a), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: leak_key(key),
                    value: String::from(value),
                    reason: "expected top|center|bottom",
                });
            }
        }

        // Sizing
        "scale" => {
            if let Some(b) = parse_bool(value) {
                set_or_warn(&mut params.scale, Some(b), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "scale",
                    value: String::from(value),
                    reason: "expected true|false|1|0|yes|no|on|off",
                });
            }
        }

        // Backdrop color
        "bg" | "bgcolor" => {
            if let Some(c) = parse_color(value) {
                set_or_warn(&mut params.bg, Some(c), key, value, warnings);
            } else if !value.is_empty() {
                warnings.push(ParseWarning::ValueInvalid {
                    key: leak_key(key),
                    value: String::from(value),
                    reason: "expected hex color or transparent",
                });
            }
        }

        // Known non-layout keys → extras, no warning
        _ => {
            if KNOWN_EXTRAS.binary_search(&key).is_ok() {
                params.extras.insert(String::from(key), String::from(value));
            } else {
                warnings.push(ParseWarning::KeyNotRecognized {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
        }
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

// ---- Value parsers ----

fn parse_u32(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|&v| v > 0)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_fit_mode(s: &str) -> Option<FitMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "contain" => Some(FitMode::Contain),
        "cover" => Some(FitMode::Cover),
        _ => None,
    }
}

fn parse_x_align(s: &str) -> Option<XAlign> {
    match s.trim().to_ascii_lowercase().as_str() {
        "left" => Some(XAlign::Left),
        "center" => Some(XAlign::Center),
        "right" => Some(XAlign::Right),
        _ => None,
    }
}

fn parse_y_align(s: &str) -> Option<YAlign> {
    match s.trim().to_ascii_lowercase().as_str() {
        "top" => Some(YAlign::Top),
        "center" => Some(YAlign::Center),
        "bottom" => Some(YAlign::Bottom),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    // Strip leading '?' if present (caller may or may not have stripped it)
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (String, String) {
    match pair.find('=') {
        Some(pos) => (String::from(&pair[..pos]), String::from(&pair[pos + 1..])),
        None => (String::from(pair), String::new()),
    }
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                result.push(' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    result.push((hi << 4 | lo) as char);
                    i += 3;
                } else {
                    result.push('%');
                    i += 1;
                }
            }
            ch => {
                result.push(ch as char);
                i += 1;
            }
        }
    }
    result
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn ascii_lowercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        out.push(b.to_ascii_lowercase() as char);
    }
    out
}

/// Return a `&'static str` for known key names used in warnings.
fn leak_key(key: &str) -> &'static str {
    match key {
        "w" | "width" => "w",
        "h" | "height" => "h",
        "mode" => "mode",
        "x" | "xalign" => "x",
        "y" | "yalign" => "y",
        "scale" => "scale",
        "bg" | "bgcolor" => "bg",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::Rgba;

    #[test]
    fn known_extras_is_sorted() {
        for w in KNOWN_EXTRAS.windows(2) {
            assert!(
                w[0] < w[1],
                "KNOWN_EXTRAS not sorted: {:?} >= {:?}",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn parse_basic_dimensions() {
        let (params, warnings) = parse_query("w=5120&h=1440");
        assert_eq!(params.w, Some(5120));
        assert_eq!(params.h, Some(1440));
        assert!(warnings.is_empty());
    }

    #[test]
    fn parse_width_height_aliases() {
        let (params, _) = parse_query("width=1920&height=1080");
        assert_eq!(params.w, Some(1920));
        assert_eq!(params.h, Some(1080));
    }

    #[test]
    fn parse_mode_and_aligns() {
        let (params, _) = parse_query("mode=cover&x=left&y=bottom");
        assert_eq!(params.mode, Some(FitMode::Cover));
        assert_eq!(params.x_align, Some(XAlign::Left));
        assert_eq!(params.y_align, Some(YAlign::Bottom));
    }

    #[test]
    fn parse_mode_case_insensitive() {
        let (params, _) = parse_query("mode=Contain&X=Right");
        assert_eq!(params.mode, Some(FitMode::Contain));
        assert_eq!(params.x_align, Some(XAlign::Right));
    }

    #[test]
    fn parse_align_aliases() {
        let (params, _) = parse_query("xalign=right&yalign=top");
        assert_eq!(params.x_align, Some(XAlign::Right));
        assert_eq!(params.y_align, Some(YAlign::Top));
    }

    #[test]
    fn parse_scale_boolean_forms() {
        let (params, _) = parse_query("scale=false");
        assert_eq!(params.scale, Some(false));

        let (params, _) = parse_query("scale=1");
        assert_eq!(params.scale, Some(true));

        let (params, _) = parse_query("scale=off");
        assert_eq!(params.scale, Some(false));
    }

    #[test]
    fn parse_bg_hex() {
        let (params, _) = parse_query("bg=ccc");
        assert_eq!(params.bg, Some(Rgba::opaque(204, 204, 204)));

        let (params, _) = parse_query("bgcolor=102030");
        assert_eq!(params.bg, Some(Rgba::opaque(16, 32, 48)));
    }

    #[test]
    fn percent_decoding_works() {
        let (params, _) = parse_query("bg=%23ff0000");
        assert_eq!(params.bg, Some(Rgba::opaque(255, 0, 0)));
    }

    #[test]
    fn plus_decodes_to_space_in_extras() {
        let (params, _) = parse_query("title=city+operations");
        assert_eq!(
            params.extras.get("title").map(String::as_str),
            Some("city operations")
        );
    }

    #[test]
    fn leading_question_mark_stripped() {
        let (params, _) = parse_query("?w=5120&h=1440");
        assert_eq!(params.w, Some(5120));
        assert_eq!(params.h, Some(1440));
    }

    #[test]
    fn known_extras_preserved_without_warning() {
        let (params, warnings) = parse_query("w=5120&locale=zh-CN&theme=dark");
        assert_eq!(
            params.extras.get("locale").map(String::as_str),
            Some("zh-CN")
        );
        assert_eq!(params.extras.get("theme").map(String::as_str), Some("dark"));
        assert!(
            warnings
                .iter()
                .all(|w| !matches!(w, ParseWarning::KeyNotRecognized { .. })),
            "should not warn about known extras: {warnings:?}"
        );
    }

    #[test]
    fn unknown_key_warns() {
        let (_, warnings) = parse_query("w=5120&foobar=baz");
        assert!(warnings.iter().any(|w| matches!(
            w,
            ParseWarning::KeyNotRecognized { key, .. } if key == "foobar"
        )));
    }

    #[test]
    fn duplicate_key_warns_last_wins() {
        let (params, warnings) = parse_query("w=5120&w=1920");
        assert_eq!(params.w, Some(1920));
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w, ParseWarning::DuplicateKey { .. }))
        );
    }

    #[test]
    fn invalid_value_warns() {
        let (params, warnings) = parse_query("mode=stretch");
        assert_eq!(params.mode, None);
        assert!(warnings.iter().any(|w| matches!(
            w,
            ParseWarning::ValueInvalid { key: "mode", .. }
        )));
    }

    #[test]
    fn zero_and_negative_dimensions_ignored() {
        let (params, _) = parse_query("w=0&h=-10");
        assert_eq!(params.w, None);
        assert_eq!(params.h, None);
    }

    #[test]
    fn empty_pairs_skipped() {
        let (params, warnings) = parse_query("&&w=5120&&h=1440&");
        assert_eq!(params.w, Some(5120));
        assert_eq!(params.h, Some(1440));
        assert!(warnings.is_empty());
    }
}
