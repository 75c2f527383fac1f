//! Cookie format detection.
//!
//! Classifies a raw pasted blob into one of the supported cookie
//! serialization formats, unwrapping at most one layer of base64.
//! Detection is a fixed-priority, first-match-wins sequence; order
//! matters because a loose input can superficially satisfy more than
//! one check.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Case-insensitive marker required on the first line of a Netscape
/// cookie file.
const NETSCAPE_HEADER: &str = "# netscape http cookie file";

/// The closed set of recognized cookie serializations.
///
/// Exactly one tag is assigned per input; [`Invalid`](Self::Invalid) is
/// the catch-all. The serialized form matches the tags the UI layer
/// displays: `netscape`, `json`, `header`, `base64-netscape`,
/// `base64-json`, `base64-header`, `invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CookieFormat {
    Netscape,
    Json,
    Header,
    Base64Netscape,
    Base64Json,
    Base64Header,
    Invalid,
}

impl CookieFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookieFormat::Netscape => "netscape",
            CookieFormat::Json => "json",
            CookieFormat::Header => "header",
            CookieFormat::Base64Netscape => "base64-netscape",
            CookieFormat::Base64Json => "base64-json",
            CookieFormat::Base64Header => "base64-header",
            CookieFormat::Invalid => "invalid",
        }
    }

    /// True for the `base64-*` tags.
    pub fn is_base64(&self) -> bool {
        matches!(
            self,
            CookieFormat::Base64Netscape | CookieFormat::Base64Json | CookieFormat::Base64Header
        )
    }
}

impl std::fmt::Display for CookieFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check one Netscape data record: exactly 7 tab-separated fields,
/// `domain \t TRUE|FALSE \t path \t TRUE|FALSE \t expiry \t name \t value`.
/// The booleans must be uppercase; name and value may be empty.
fn is_netscape_data_line(line: &str) -> bool {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 7 {
        return false;
    }
    !fields[0].is_empty()
        && (fields[1] == "TRUE" || fields[1] == "FALSE")
        && !fields[2].is_empty()
        && (fields[3] == "TRUE" || fields[3] == "FALSE")
        && !fields[4].is_empty()
        && fields[4].bytes().all(|b| b.is_ascii_digit())
}

/// Netscape cookie-jar check: the first non-blank line must carry the
/// `# Netscape HTTP Cookie File` marker, and every remaining non-blank,
/// non-comment line must be a well-formed data record (at least one).
pub(crate) fn is_valid_netscape(text: &str) -> bool {
    let lines: Vec<&str> = text.trim().split('\n').map(str::trim).collect();
    let first = match lines.first() {
        Some(line) if !line.is_empty() => *line,
        _ => return false,
    };
    if !first.to_ascii_lowercase().starts_with(NETSCAPE_HEADER) {
        return false;
    }

    let data_lines: Vec<&str> = lines[1..]
        .iter()
        .copied()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    !data_lines.is_empty() && data_lines.iter().all(|line| is_netscape_data_line(line))
}

/// A record-shaped cookie object: a string `name` field plus a present
/// `value` key of any type (null counts as present).
fn is_cookie_record(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.get("name").is_some_and(Value::is_string) && obj.contains_key("value"))
}

/// JSON cookie check: a single record object, or an array that is empty
/// or contains at least one record.
pub(crate) fn is_valid_json_cookies(text: &str) -> bool {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items.is_empty() || items.iter().any(is_cookie_record),
        Ok(value @ Value::Object(_)) => is_cookie_record(&value),
        _ => false,
    }
}

fn is_header_pair(segment: &str) -> bool {
    match segment.split_once('=') {
        Some((key, value)) => {
            !key.is_empty()
                && !key.chars().any(|c| c == ';' || c.is_whitespace())
                && !value.chars().any(|c| c == '=' || c == ';' || c.is_whitespace())
        }
        None => false,
    }
}

/// `Cookie:` header check: one or more `key=value` pairs separated by
/// semicolons. Keys are non-empty; values may be empty; neither side may
/// contain `=`, `;`, or whitespace.
pub(crate) fn is_valid_header_cookies(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.split(';').all(|segment| is_header_pair(segment.trim()))
}

/// Decode one layer of base64 into UTF-8 text.
///
/// ASCII whitespace is stripped first and both padded and unpadded
/// standard-alphabet input is accepted, matching what browser exports
/// produce. Returns `None` on an invalid alphabet or non-UTF-8 bytes.
pub(crate) fn decode_base64_text(input: &str) -> Option<String> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = general_purpose::STANDARD
        .decode(compact.as_bytes())
        .or_else(|_| general_purpose::STANDARD_NO_PAD.decode(compact.as_bytes()))
        .ok()?;
    String::from_utf8(bytes).ok()
}

/// Classify a raw input string into a [`CookieFormat`].
///
/// Runs the direct checks in priority order (Netscape, JSON, header),
/// then retries the same sequence after one base64 unwrap. Total over
/// arbitrary input; never panics.
pub fn detect_cookie_format(input: &str) -> CookieFormat {
    if is_valid_netscape(input) {
        return CookieFormat::Netscape;
    }
    if is_valid_json_cookies(input) {
        return CookieFormat::Json;
    }
    if is_valid_header_cookies(input) {
        return CookieFormat::Header;
    }

    if let Some(decoded) = decode_base64_text(input) {
        if is_valid_netscape(&decoded) {
            return CookieFormat::Base64Netscape;
        }
        if is_valid_json_cookies(&decoded) {
            return CookieFormat::Base64Json;
        }
        if is_valid_header_cookies(&decoded) {
            return CookieFormat::Base64Header;
        }
    }

    tracing::debug!(len = input.len(), "cookie input matched no known format");
    CookieFormat::Invalid
}

/// True iff the input classifies as something other than `invalid`.
pub fn is_valid_cookie_input(input: &str) -> bool {
    detect_cookie_format(input) != CookieFormat::Invalid
}
