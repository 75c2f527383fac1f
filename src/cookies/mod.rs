//! Cookie format detection, extraction, and login validation.
//!
//! Users paste session cookies exported from a browser extension, and
//! exports come in several shapes. This module classifies a raw blob,
//! normalizes it to a name/value map, and checks the map for the fields
//! an authenticated session needs.
//!
//! # Supported formats
//!
//! | Tag | Shape |
//! |-----|-------|
//! | `netscape` | `# Netscape HTTP Cookie File` header plus 7-field tab-separated records (curl/wget jar) |
//! | `json` | object with `name`/`value` fields, or an array of such objects |
//! | `header` | `key=value; key=value` as sent in a `Cookie:` header |
//! | `base64-*` | any of the above, wrapped in one layer of base64 |
//!
//! Classification is deterministic and total: every string maps to
//! exactly one tag, with `invalid` as the catch-all. Checks run in a
//! fixed priority order (Netscape, JSON, header; then the same order
//! again after one base64 unwrap) and the first match wins.
//!
//! # Example
//!
//! ```rust
//! use quillcore::cookies::extract::{extract_cookie_map, missing_login_fields};
//! use quillcore::cookies::format::{detect_cookie_format, CookieFormat};
//!
//! let pasted = "kdt=a; twid=b; ct0=c";
//! assert_eq!(detect_cookie_format(pasted), CookieFormat::Header);
//!
//! let map = extract_cookie_map(pasted).unwrap();
//! assert_eq!(map.get("twid").map(String::as_str), Some("b"));
//!
//! // auth_token is absent, so this is not a usable login session.
//! assert_eq!(
//!     missing_login_fields(pasted),
//!     Some("missing fields: auth_token".to_string())
//! );
//! ```

pub mod extract;
pub mod format;
