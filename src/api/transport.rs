//
//  createsend
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The request pipeline never opens connections itself. It builds an
//! [`HttpRequest`], hands it to a [`Transport`], and interprets the
//! [`HttpResponse`] that comes back. Any HTTP client can sit behind the trait,
//! including test doubles that return canned responses.
//!
//! [`ReqwestTransport`] is the default implementation.
//!
//! ## Contract
//!
//! - A response with any status code, including 4xx and 5xx, is `Ok`.
//! - `Err` is reserved for failures where no response was obtained: DNS,
//!   refused connections, TLS failures, timeouts.
//! - Implementations must be safe to share between tasks.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

use super::common::BoxError;

/// Error returned by a transport when no response could be obtained.
pub type TransportError = BoxError;

/// An outgoing request, fully resolved and authenticated.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// A response as returned by the transport, with its body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Builds a response with no headers. Mostly useful for test doubles.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Capability that performs the network round trip for the pipeline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns whatever response the server gave.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an already configured reqwest client.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Builds a client with an optional overall request timeout.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
