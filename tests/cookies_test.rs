use base64::{engine::general_purpose::STANDARD, Engine as _};
use proptest::prelude::*;
use quillcore::base::CoreError;
use quillcore::cookies::extract::{
    extract_cookie_map, is_twitter_login_cookie, missing_login_fields, REQUIRED_LOGIN_FIELDS,
};
use quillcore::cookies::format::{detect_cookie_format, is_valid_cookie_input, CookieFormat};

const NETSCAPE_LOGIN: &str = "# Netscape HTTP Cookie File\n\
    # https://curl.se/docs/http-cookies.html\n\
    \n\
    .twitter.com\tTRUE\t/\tTRUE\t1735689600\tkdt\tk1\n\
    .twitter.com\tTRUE\t/\tTRUE\t1735689600\ttwid\tt1\n\
    .twitter.com\tTRUE\t/\tTRUE\t1735689600\tct0\tc1\n\
    .twitter.com\tTRUE\t/\tTRUE\t1735689600\tauth_token\ta1";

#[test]
fn detects_each_direct_format() {
    assert_eq!(detect_cookie_format(NETSCAPE_LOGIN), CookieFormat::Netscape);
    assert_eq!(
        detect_cookie_format(r#"[{"name": "kdt", "value": "k1"}]"#),
        CookieFormat::Json
    );
    assert_eq!(
        detect_cookie_format("kdt=k1; twid=t1"),
        CookieFormat::Header
    );
}

#[test]
fn empty_json_array_is_valid_json_format() {
    assert_eq!(detect_cookie_format("[]"), CookieFormat::Json);
}

#[test]
fn netscape_without_header_line_is_invalid() {
    // Well-formed data lines alone do not make a Netscape file.
    let body = NETSCAPE_LOGIN
        .lines()
        .filter(|l| !l.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(detect_cookie_format(&body), CookieFormat::Invalid);
}

#[test]
fn base64_wrap_maps_each_format_to_its_counterpart() {
    let cases = [
        (NETSCAPE_LOGIN.to_string(), CookieFormat::Base64Netscape),
        (
            r#"{"name": "kdt", "value": "k1"}"#.to_string(),
            CookieFormat::Base64Json,
        ),
        ("kdt=k1; twid=t1".to_string(), CookieFormat::Base64Header),
    ];
    for (plain, expected) in cases {
        assert_eq!(detect_cookie_format(&STANDARD.encode(&plain)), expected);
    }
}

#[test]
fn full_login_cookie_in_every_format() {
    // Length is a multiple of 3 so the base64 form carries no padding;
    // a single trailing pad would short-circuit as a direct header hit.
    let header = "kdt=k1; twid=t1; ct0=c1; auth_token=a11";
    let json = r#"{"name": "x", "value": "y", "kdt": "k1", "twid": "t1", "ct0": "c1", "auth_token": "a1"}"#;

    for input in [
        header.to_string(),
        NETSCAPE_LOGIN.to_string(),
        json.to_string(),
        STANDARD.encode(header),
        STANDARD.encode(NETSCAPE_LOGIN),
        STANDARD.encode(json),
    ] {
        assert!(is_twitter_login_cookie(&input), "input {input:?}");
        assert_eq!(missing_login_fields(&input), None);
    }
}

#[test]
fn removing_any_required_field_names_exactly_that_field() {
    let full = "kdt=k1; twid=t1; ct0=c1; auth_token=a1";
    for field in REQUIRED_LOGIN_FIELDS {
        let partial = full
            .split("; ")
            .filter(|pair| !pair.starts_with(&format!("{field}=")))
            .collect::<Vec<_>>()
            .join("; ");
        assert!(!is_twitter_login_cookie(&partial));
        assert_eq!(
            missing_login_fields(&partial),
            Some(format!("missing fields: {field}"))
        );
    }
}

#[test]
fn extraction_reads_netscape_name_value_fields() {
    let map = extract_cookie_map(NETSCAPE_LOGIN).unwrap();
    assert_eq!(map.len(), 4);
    assert_eq!(map.get("kdt").map(String::as_str), Some("k1"));
    assert_eq!(map.get("auth_token").map(String::as_str), Some("a1"));
}

#[test]
fn json_detection_and_extraction_use_different_schemas() {
    // Array-of-records is what detection validates...
    let records = r#"[{"name": "kdt", "value": "k1"}]"#;
    assert_eq!(detect_cookie_format(records), CookieFormat::Json);
    // ...but extraction reads an object's own keys, so the array fails.
    assert_eq!(
        extract_cookie_map(records),
        Err(CoreError::CookieNotAnObject)
    );
    assert!(!is_twitter_login_cookie(records));

    // And a flat object only reaches extraction if it happens to carry
    // the record fields detection wants.
    let flat = r#"{"kdt": "k1", "twid": "t1", "ct0": "c1", "auth_token": "a1"}"#;
    assert_eq!(detect_cookie_format(flat), CookieFormat::Invalid);
    assert!(!is_twitter_login_cookie(flat));
}

proptest! {
    // Totality: classification never panics and always lands on one of
    // the seven tags, for any input at all.
    #[test]
    fn detection_is_total(input in ".*") {
        let format = detect_cookie_format(&input);
        prop_assert!(matches!(
            format,
            CookieFormat::Netscape
                | CookieFormat::Json
                | CookieFormat::Header
                | CookieFormat::Base64Netscape
                | CookieFormat::Base64Json
                | CookieFormat::Base64Header
                | CookieFormat::Invalid
        ));
    }

    #[test]
    fn validity_mirrors_detection(input in ".*") {
        prop_assert_eq!(
            is_valid_cookie_input(&input),
            detect_cookie_format(&input) != CookieFormat::Invalid
        );
    }

    #[test]
    fn extraction_never_panics(input in ".*") {
        let _ = extract_cookie_map(&input);
        let _ = is_twitter_login_cookie(&input);
        let _ = missing_login_fields(&input);
    }

    // Base64 round-trip: a directly classified input keeps its family
    // after encoding. Unpadded encoding, because a single trailing pad
    // turns the encoded text into a literal `key=` header pair that the
    // direct checks claim first.
    #[test]
    fn base64_round_trip_for_headers(
        pairs in proptest::collection::vec(("[a-z_]{1,8}", "[A-Za-z0-9_%-]{0,12}"), 1..6)
    ) {
        let header = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ");
        prop_assert_eq!(detect_cookie_format(&header), CookieFormat::Header);

        let encoded = STANDARD.encode(&header);
        let unpadded = encoded.trim_end_matches('=');
        prop_assert_eq!(
            detect_cookie_format(unpadded),
            CookieFormat::Base64Header
        );
    }
}
