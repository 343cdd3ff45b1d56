//
//  createsend
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Campaign Monitor accepts two kinds of credentials:
//!
//! - **API key**: sent as HTTP Basic authentication with the key as both the
//!   username and the password.
//! - **OAuth access token**: sent as an `Authorization: Bearer <token>` header.
//!
//! ## Example
//!
//! ```rust
//! use createsend::auth::{Authentication, AuthMethod};
//!
//! let auth = Authentication::api_key("your-api-key");
//! assert_eq!(auth.method(), AuthMethod::ApiKey);
//! assert!(auth.validate().is_ok());
//!
//! let unset = Authentication::default();
//! assert!(unset.validate().is_err());
//! ```

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::api::common::{ApiError, ErrorCode};

/// The credential scheme stamped onto outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// No credential chosen yet. A client cannot be built in this state.
    #[default]
    Unset,
    /// API key sent as HTTP Basic auth.
    ApiKey,
    /// OAuth access token sent as a Bearer token.
    OAuthBearer,
}

/// A credential together with the scheme used to send it.
///
/// Immutable once created. The token is never printed by `Debug`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Authentication {
    token: String,
    method: AuthMethod,
}

impl Authentication {
    /// Authenticates with an account or client API key.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            token: key.into(),
            method: AuthMethod::ApiKey,
        }
    }

    /// Authenticates with an OAuth access token.
    pub fn oauth(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            method: AuthMethod::OAuthBearer,
        }
    }

    pub fn method(&self) -> AuthMethod {
        self.method
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Checks that a method was chosen and its token is non-empty.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::AuthenticationNotSet`] when the method is `Unset`
    /// - [`ErrorCode::EmptyApiKey`] when an API key is empty
    /// - [`ErrorCode::EmptyOAuthToken`] when an OAuth token is empty
    pub fn validate(&self) -> Result<(), ApiError> {
        match self.method {
            AuthMethod::Unset => Err(ApiError::new(ErrorCode::AuthenticationNotSet)),
            AuthMethod::ApiKey if self.token.is_empty() => {
                Err(ApiError::new(ErrorCode::EmptyApiKey))
            }
            AuthMethod::OAuthBearer if self.token.is_empty() => {
                Err(ApiError::new(ErrorCode::EmptyOAuthToken))
            }
            _ => Ok(()),
        }
    }

    /// Stamps the credential onto a request's headers.
    ///
    /// - `ApiKey` sets `Authorization: Basic base64(key:key)`
    /// - `OAuthBearer` sets `Authorization: Bearer <token>`
    /// - `Unset` leaves the headers untouched
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::Unknown`] wrapping the header error when the token
    /// contains bytes that cannot appear in a header value.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), ApiError> {
        let value = match self.method {
            AuthMethod::Unset => return Ok(()),
            AuthMethod::ApiKey => {
                let encoded = STANDARD.encode(format!("{}:{}", self.token, self.token));
                format!("Basic {}", encoded)
            }
            AuthMethod::OAuthBearer => format!("Bearer {}", self.token),
        };

        let mut value = HeaderValue::from_str(&value)
            .map_err(|e| ApiError::wrap(ErrorCode::Unknown, e))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authentication")
            .field("method", &self.method)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Authentication::default()
            .validate()
            .unwrap_err()
            .is(ErrorCode::AuthenticationNotSet));
        assert!(Authentication::api_key("")
            .validate()
            .unwrap_err()
            .is(ErrorCode::EmptyApiKey));
        assert!(Authentication::oauth("")
            .validate()
            .unwrap_err()
            .is(ErrorCode::EmptyOAuthToken));
        assert!(Authentication::api_key("key").validate().is_ok());
        assert!(Authentication::oauth("token").validate().is_ok());
    }

    #[test]
    fn test_apply_api_key_uses_basic_auth() {
        let mut headers = HeaderMap::new();
        Authentication::api_key("key").apply(&mut headers).unwrap();

        // base64("key:key")
        assert_eq!(headers[AUTHORIZATION], "Basic a2V5OmtleQ==");
    }

    #[test]
    fn test_apply_oauth_uses_bearer() {
        let mut headers = HeaderMap::new();
        Authentication::oauth("token").apply(&mut headers).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer token");
    }

    #[test]
    fn test_apply_unset_is_noop() {
        let mut headers = HeaderMap::new();
        Authentication::default().apply(&mut headers).unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_apply_rejects_unencodable_token() {
        let mut headers = HeaderMap::new();
        let err = Authentication::oauth("bad\ntoken")
            .apply(&mut headers)
            .unwrap_err();
        assert!(err.is(ErrorCode::Unknown));
        assert!(err.is_wrapped());
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", Authentication::api_key("secret"));
        assert!(!debug.contains("secret"));
        assert!(debug.contains("ApiKey"));
    }
}
