//
//  createsend
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the resource facades and the CLI.
//!
//! ## Categories
//!
//! - **Date Utilities**: [`parse_api_date`], [`format_api_date`], and the
//!   [`api_date`] serde adapters for the API's `YYYY-MM-DD HH:MM:SS` timestamps
//! - **Path Utilities**: [`with_query`], [`escape_segment`]
//! - **String Utilities**: [`truncate`]
//!
//! ## Example
//!
//! ```rust
//! use createsend::util::{parse_api_date, with_query};
//!
//! let sent = parse_api_date("2009-05-18 16:47:00").unwrap();
//! assert_eq!(sent.format("%d/%m/%Y").to_string(), "18/05/2009");
//!
//! let path = with_query("admins.json", &[("email", "a+b@example.com".to_string())]);
//! assert_eq!(path, "admins.json?email=a%2Bb%40example.com");
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use url::form_urlencoded;

use crate::api::common::{ApiError, ApiResult, ErrorCode};

/// Timestamp layouts the API uses, most specific first.
const API_DATE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Layout used when sending timestamps to the API.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a timestamp as returned by the API.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM`, the ISO `T` separator
/// variant, and bare `YYYY-MM-DD` dates (taken as midnight).
pub fn parse_api_date(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let value = value.trim();
    let mut last_err = None;
    for format in API_DATE_FORMATS {
        match NaiveDateTime::parse_from_str(value, format) {
            Ok(dt) => return Ok(dt),
            Err(e) => last_err = Some(e),
        }
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(NaiveTime::default())),
        Err(e) => Err(last_err.unwrap_or(e)),
    }
}

/// Formats a timestamp the way the API accepts it in request bodies.
pub fn format_api_date(value: &NaiveDateTime) -> String {
    value.format(API_DATE_FORMAT).to_string()
}

/// Appends URL-encoded query pairs to a relative path.
///
/// Returns the path unchanged when there are no pairs.
pub fn with_query<K, V>(path: &str, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if pairs.is_empty() {
        return path.to_string();
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, serializer.finish())
}

/// Percent-encodes an identifier for use as a single path segment.
///
/// Blank identifiers and the dot segments `.` and `..` fail with
/// [`ErrorCode::InvalidUrl`], since they would not name a resource.
pub fn escape_segment(value: &str) -> ApiResult<String> {
    let value = value.trim();
    if value.is_empty() || value == "." || value == ".." {
        return Err(ApiError::with_message(
            ErrorCode::InvalidUrl.code(),
            format!("{}: invalid identifier {:?}", ErrorCode::InvalidUrl.message(), value),
        ));
    }
    Ok(form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}

/// Truncates a string to `max_len` characters, ending with `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Serde adapters for API timestamps.
///
/// ```rust
/// use chrono::NaiveDateTime;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Sent {
///     #[serde(with = "createsend::util::api_date::option", default)]
///     sent_date: Option<NaiveDateTime>,
/// }
///
/// let sent: Sent = serde_json::from_str(r#"{"sent_date":"2010-10-12 12:58:00"}"#).unwrap();
/// assert!(sent.sent_date.is_some());
/// ```
pub mod api_date {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_api_date(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_api_date(&raw).map_err(D::Error::custom)
    }

    /// Optional timestamps; `null` and empty strings decode as `None`.
    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(dt) => serializer.serialize_str(&super::super::format_api_date(dt)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) if !raw.trim().is_empty() => super::super::parse_api_date(&raw)
                    .map(Some)
                    .map_err(D::Error::custom),
                _ => Ok(None),
            }
        }
    }
}
