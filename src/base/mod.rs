//! Base types and error handling.
//!
//! Provides the shared error type used by every fallible operation:
//! - [`CoreError`]: what went wrong while decoding or extracting a
//!   pasted cookie blob

pub mod error;

pub use error::CoreError;
