//! Cookie map extraction and login validation.
//!
//! Turns a classified input into a normalized name/value map and checks
//! it for the fields a logged-in session requires. All operations are
//! total: extraction failures come back as [`CoreError`] values, never
//! panics.

use std::borrow::Cow;
use std::collections::BTreeMap;

use base64::{engine::general_purpose, Engine as _};
use serde_json::Value;

use crate::base::CoreError;
use crate::cookies::format::{decode_base64_text, detect_cookie_format, CookieFormat};

/// Normalized cookie name/value view. Keys are case-sensitive;
/// duplicate names during parsing resolve last-write-wins.
pub type CookieMap = BTreeMap<String, String>;

/// Cookie names that must all be present for an input to count as an
/// authenticated session.
pub const REQUIRED_LOGIN_FIELDS: [&str; 4] = ["kdt", "twid", "ct0", "auth_token"];

/// Extract a [`CookieMap`] from a raw input.
///
/// The input is classified first; `base64-*` formats are decoded before
/// parsing. Note the JSON family reads the object's own keys as the
/// map, which is deliberately looser than the record schema detection
/// checks for.
pub fn extract_cookie_map(input: &str) -> Result<CookieMap, CoreError> {
    let format = detect_cookie_format(input);
    match format {
        CookieFormat::Json | CookieFormat::Base64Json => {
            json_cookie_map(&effective_text(input, format)?)
        }
        CookieFormat::Header | CookieFormat::Base64Header => {
            Ok(header_cookie_map(&effective_text(input, format)?))
        }
        CookieFormat::Netscape | CookieFormat::Base64Netscape => {
            Ok(netscape_cookie_map(&effective_text(input, format)?))
        }
        CookieFormat::Invalid => Err(CoreError::UnsupportedFormat),
    }
}

/// Resolve the text to parse: decode one base64 layer for `base64-*`
/// formats, pass everything else through.
fn effective_text(input: &str, format: CookieFormat) -> Result<Cow<'_, str>, CoreError> {
    if format.is_base64() {
        decode_base64_text(input)
            .map(Cow::Owned)
            .ok_or(CoreError::Base64DecodeFailed)
    } else {
        Ok(Cow::Borrowed(input))
    }
}

fn json_cookie_map(text: &str) -> Result<CookieMap, CoreError> {
    let value: Value = serde_json::from_str(text).map_err(|e| CoreError::json_parse(&e))?;
    let Value::Object(entries) = value else {
        return Err(CoreError::CookieNotAnObject);
    };
    Ok(entries
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => (key, s),
            other => (key, other.to_string()),
        })
        .collect())
}

fn header_cookie_map(text: &str) -> CookieMap {
    let mut map = CookieMap::new();
    for segment in text.split(';') {
        if let Some((key, value)) = segment.trim().split_once('=') {
            if !key.is_empty() {
                map.insert(key.to_string(), value.to_string());
            }
        }
    }
    map
}

fn netscape_cookie_map(text: &str) -> CookieMap {
    let mut map = CookieMap::new();
    for (name, value) in netscape_pairs(text) {
        if !name.is_empty() {
            map.insert(name.to_string(), value.to_string());
        }
    }
    map
}

/// Name/value fields (indices 5 and 6) of each Netscape data line, in
/// file order. Lines with fewer than 7 fields are dropped.
fn netscape_pairs(text: &str) -> Vec<(&str, &str)> {
    text.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            (fields.len() >= 7).then(|| (fields[5], fields[6]))
        })
        .collect()
}

/// True iff the input parses and carries all of
/// [`REQUIRED_LOGIN_FIELDS`]. Presence only; values may be empty.
pub fn is_twitter_login_cookie(input: &str) -> bool {
    match extract_cookie_map(input) {
        Ok(map) => REQUIRED_LOGIN_FIELDS.iter().all(|key| map.contains_key(*key)),
        Err(_) => false,
    }
}

/// Human-readable account of why an input is not a usable login
/// session: the absent required fields (comma-joined), a generic
/// message when extraction fails outright, or `None` when nothing is
/// missing.
pub fn missing_login_fields(input: &str) -> Option<String> {
    let map = match extract_cookie_map(input) {
        Ok(map) => map,
        Err(CoreError::UnsupportedFormat) => return Some("invalid cookie format".to_string()),
        Err(_) => return Some("failed to parse cookie input".to_string()),
    };

    let missing: Vec<&str> = REQUIRED_LOGIN_FIELDS
        .iter()
        .copied()
        .filter(|key| !map.contains_key(*key))
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("missing fields: {}", missing.join(", ")))
    }
}

/// Normalize a valid input to a base64-encoded `key=value; ...` header
/// string, the canonical form the shell persists.
///
/// Accepts `header`, `json`/`base64-json`, and
/// `netscape`/`base64-netscape` input. Anything else returns `None`,
/// including (matching long-standing behavior) `base64-header` input,
/// which callers pass through unchanged instead.
pub fn convert_to_base64_header(input: &str) -> Option<String> {
    let format = detect_cookie_format(input);

    let header = match format {
        CookieFormat::Header => input.trim().to_string(),
        CookieFormat::Json | CookieFormat::Base64Json => {
            let text = effective_text(input, format).ok()?;
            let map = json_cookie_map(&text).ok()?;
            map.iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("; ")
        }
        CookieFormat::Netscape | CookieFormat::Base64Netscape => {
            let text = effective_text(input, format).ok()?;
            netscape_pairs(&text)
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ")
        }
        _ => return None,
    };

    if header.is_empty() {
        return None;
    }
    Some(general_purpose::STANDARD.encode(header))
}
