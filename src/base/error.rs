use thiserror::Error;

/// Errors produced while decoding or extracting cookie input.
///
/// Detection itself never fails (unrecognized input classifies as
/// `invalid`); these errors surface from [`extract_cookie_map`] and the
/// helpers built on it.
///
/// [`extract_cookie_map`]: crate::cookies::extract::extract_cookie_map
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    /// The input did not classify as any supported cookie format.
    #[error("Unsupported cookie format")]
    UnsupportedFormat,
    /// A `base64-*` input failed to decode to UTF-8 text on the second
    /// pass.
    #[error("Base64 decoding failed")]
    Base64DecodeFailed,
    /// JSON input failed to parse.
    #[error("JSON parsing failed: {message}")]
    JsonParseFailed { message: String },
    /// JSON input parsed, but the top-level value is not an object.
    #[error("JSON cookie input is not an object")]
    CookieNotAnObject,
}

impl CoreError {
    /// Build a `JsonParseFailed` from any serde_json error.
    pub fn json_parse(err: &serde_json::Error) -> Self {
        CoreError::JsonParseFailed {
            message: err.to_string(),
        }
    }
}
