//! # quillcore
//!
//! Pure-computation core for a liked-posts collector.
//!
//! `quillcore` holds the two pieces of the application that are plain
//! data-in/data-out logic, kept free of any UI, I/O, or native-bridge
//! code so the surrounding shell can call them from anywhere:
//!
//! - **Cookie handling**: classify a pasted cookie blob into one of the
//!   supported serialization formats (Netscape cookie file, JSON,
//!   `Cookie:` header string, each optionally base64-wrapped), extract a
//!   normalized name/value map, and check it for an authenticated
//!   session.
//! - **Media grid layout**: choose a row/column arrangement for a post's
//!   1–4 media attachments, with an exhaustive permutation search for
//!   the four-item case.
//!
//! ## Quick Start
//!
//! ```rust
//! use quillcore::cookies::extract::is_twitter_login_cookie;
//! use quillcore::cookies::format::{detect_cookie_format, CookieFormat};
//!
//! let pasted = "kdt=a; twid=b; ct0=c; auth_token=d";
//! assert_eq!(detect_cookie_format(pasted), CookieFormat::Header);
//! assert!(is_twitter_login_cookie(pasted));
//! ```
//!
//! ```rust
//! use quillcore::layout::grid::{plan_layout, LayoutPlan, MediaItem, MediaKind};
//!
//! let photos: Vec<MediaItem> = (0..2)
//!     .map(|i| MediaItem::new(format!("m{i}"), MediaKind::Photo, Some(50.0), Some(100.0)))
//!     .collect();
//! // Two portrait photos sit side by side.
//! assert_eq!(plan_layout(&photos), LayoutPlan::Rows(vec![vec![0, 1]]));
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Shared error type
//! - [`cookies`] - Cookie format detection, extraction, and login validation
//! - [`layout`] - Media grid layout planning
//!
//! Every public operation is total over arbitrary input: malformed
//! base64, malformed JSON, and malformed tab structure all degrade to a
//! negative classification or an error value, never a panic.

pub mod base;
pub mod cookies;
pub mod layout;
