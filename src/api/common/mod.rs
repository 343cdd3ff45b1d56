//
//  createsend
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for Campaign Monitor
//!
//! This module provides the types shared by every resource facade: the single
//! error type produced by the request pipeline, the client-side error codes, and
//! the paged-result envelope used by list endpoints.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ErrorCode`] - Codes for failures detected on the client side
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use createsend::api::common::{ApiError, ErrorCode};
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.is(ErrorCode::Unknown) => println!("Transport failed: {}", e),
//!         Err(e) if e.code() == 50 => println!("Please authenticate first"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - Errors compare equal when their codes match; messages are not a stable contract
//! - Client-side codes are negative, server-reported codes are not

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Boxed error preserved as the cause of an [`ApiError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result alias used throughout the API layer.
pub type ApiResult<T> = Result<T, ApiError>;

/// Codes for failures detected before or around the network round trip.
///
/// The server reports its own codes (always zero or positive) inside error
/// bodies. Local codes are negative so the two ranges never collide.
///
/// | Variant | Code | Raised when |
/// |---------|------|-------------|
/// | `Unknown` | -1 | Transport failure or request object construction failure |
/// | `NilHttpClient` | -2 | No transport was supplied |
/// | `AuthenticationNotSet` | -3 | No credential method was chosen |
/// | `EmptyApiKey` | -4 | API key method with an empty key |
/// | `EmptyOAuthToken` | -5 | Bearer method with an empty token |
/// | `EmptyUrl` | -6 | Base URL or request path is empty |
/// | `InvalidUrl` | -7 | Base URL or request path does not parse |
/// | `InvalidRequestBody` | -8 | Request body could not be serialized |
/// | `InvalidJson` | -9 | Response body could not be decoded |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Unknown,
    NilHttpClient,
    AuthenticationNotSet,
    EmptyApiKey,
    EmptyOAuthToken,
    EmptyUrl,
    InvalidUrl,
    InvalidRequestBody,
    InvalidJson,
}

impl ErrorCode {
    /// Returns the numeric code carried by errors of this kind.
    pub fn code(self) -> i64 {
        match self {
            Self::Unknown => -1,
            Self::NilHttpClient => -2,
            Self::AuthenticationNotSet => -3,
            Self::EmptyApiKey => -4,
            Self::EmptyOAuthToken => -5,
            Self::EmptyUrl => -6,
            Self::InvalidUrl => -7,
            Self::InvalidRequestBody => -8,
            Self::InvalidJson => -9,
        }
    }

    /// Default human-readable message for this kind of failure.
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "unknown error",
            Self::NilHttpClient => "http client is not set",
            Self::AuthenticationNotSet => "authentication method is not set",
            Self::EmptyApiKey => "api key is empty",
            Self::EmptyOAuthToken => "oauth token is empty",
            Self::EmptyUrl => "url is empty",
            Self::InvalidUrl => "url is invalid",
            Self::InvalidRequestBody => "request body could not be encoded",
            Self::InvalidJson => "response body is not valid json",
        }
    }

    /// Maps a numeric code back to a client-side kind, if it is one.
    pub fn from_code(code: i64) -> Option<Self> {
        [
            Self::Unknown,
            Self::NilHttpClient,
            Self::AuthenticationNotSet,
            Self::EmptyApiKey,
            Self::EmptyOAuthToken,
            Self::EmptyUrl,
            Self::InvalidUrl,
            Self::InvalidRequestBody,
            Self::InvalidJson,
        ]
        .into_iter()
        .find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Unified error type for all Campaign Monitor API operations.
///
/// `ApiError` covers two failure domains with one shape:
///
/// - Failures detected locally (invalid configuration, transport failure,
///   encode/decode failure), tagged with an [`ErrorCode`].
/// - Failures reported by the server in a non-2xx response body of the form
///   `{"Code": 250, "Message": "..."}`, carried through verbatim.
///
/// Two errors are the same kind when their codes match. Message and cause are
/// ignored by `PartialEq`, so callers can compare against a freshly built
/// error or use [`ApiError::is`] instead of matching on text.
///
/// # Example
///
/// ```rust
/// use createsend::api::common::{ApiError, ErrorCode};
///
/// let err = ApiError::new(ErrorCode::EmptyUrl);
/// assert_eq!(err, ApiError::with_message(ErrorCode::EmptyUrl.code(), "other text"));
/// assert!(err.is(ErrorCode::EmptyUrl));
/// assert!(!err.is_wrapped());
/// ```
#[derive(Error, Debug, Deserialize)]
#[error("{message} (code {code})")]
pub struct ApiError {
    #[serde(rename = "Code", default)]
    code: i64,

    #[serde(rename = "Message", default)]
    message: String,

    #[serde(skip)]
    #[source]
    cause: Option<BoxError>,
}

impl ApiError {
    /// Creates an error of the given kind with its default message.
    pub fn new(kind: ErrorCode) -> Self {
        Self {
            code: kind.code(),
            message: kind.message().to_string(),
            cause: None,
        }
    }

    /// Creates an error of the given kind that wraps an underlying failure.
    ///
    /// The cause stays reachable through [`std::error::Error::source`].
    pub fn wrap<E>(kind: ErrorCode, cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        let cause = cause.into();
        Self {
            code: kind.code(),
            message: format!("{}: {}", kind.message(), cause),
            cause: Some(cause),
        }
    }

    /// Creates an error with an arbitrary code and message.
    pub fn with_message(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    /// The numeric error code.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// The error message. Not a stable contract; match on codes instead.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying failure, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Whether this error wraps an underlying failure.
    pub fn is_wrapped(&self) -> bool {
        self.cause.is_some()
    }

    /// Whether this error is of the given client-side kind.
    pub fn is(&self, kind: ErrorCode) -> bool {
        self.code == kind.code()
    }

    /// The client-side kind of this error, or `None` for server-reported codes.
    pub fn kind(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.code)
    }

    /// Decodes a server error body and populates the cause from its message.
    pub(crate) fn from_response_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut err: Self = serde_json::from_slice(body)?;
        err.cause = Some(err.message.clone().into());
        Ok(err)
    }
}

impl From<ErrorCode> for ApiError {
    fn from(kind: ErrorCode) -> Self {
        Self::new(kind)
    }
}

impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for ApiError {}

/// Deserializes `null` as the type's default value.
///
/// The API sends `null` where an empty collection would be expected; use with
/// `#[serde(default, deserialize_with = "null_as_default")]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_code() {
        let a = ApiError::with_message(500, "first");
        let b = ApiError::wrap(ErrorCode::Unknown, "boom");
        let c = ApiError::with_message(500, "second");

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(b, ApiError::new(ErrorCode::Unknown));
    }

    #[test]
    fn test_wrap_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ApiError::wrap(ErrorCode::Unknown, io);

        assert!(err.is_wrapped());
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "refused");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("io error");
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused);
    }

    #[test]
    fn test_server_body_decodes() {
        let err = ApiError::from_response_body(br#"{"Message":"msg","Code":500}"#).unwrap();
        assert_eq!(err.code(), 500);
        assert_eq!(err.message(), "msg");
        assert_eq!(err.cause().map(|c| c.to_string()), Some("msg".to_string()));
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_server_body_rejects_garbage() {
        assert!(ApiError::from_response_body(b"<html>").is_err());
        assert!(ApiError::from_response_body(b"[1, 2]").is_err());
    }

    #[test]
    fn test_server_body_without_code_keeps_message() {
        let err = ApiError::from_response_body(br#"{"Message":"Invalid API key"}"#).unwrap();
        assert_eq!(err.code(), 0);
        assert_eq!(err.message(), "Invalid API key");
        assert!(err.is_wrapped());
    }

    #[test]
    fn test_codes_round_trip_kind() {
        assert_eq!(ErrorCode::from_code(-9), Some(ErrorCode::InvalidJson));
        assert_eq!(ErrorCode::from_code(0), None);
        assert!(ApiError::new(ErrorCode::EmptyApiKey).is(ErrorCode::EmptyApiKey));
    }

    #[test]
    fn test_null_as_default() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "null_as_default")]
            items: Vec<String>,
        }

        let h: Holder = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(h.items.is_empty());
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(h.items.is_empty());
    }
}
