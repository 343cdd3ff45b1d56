//
//  createsend
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for Campaign Monitor
//!
//! This module provides the request pipeline every resource facade goes
//! through. It resolves paths against the base URL, serializes bodies,
//! injects the user agent and credentials, hands the request to the
//! [`Transport`], and turns the response into a typed value or an [`ApiError`].
//!
//! ## Features
//!
//! - Base URL normalization (always `https://`)
//! - Authentication header injection
//! - JSON serialization/deserialization
//! - Server error bodies decoded into [`ApiError`] with the server's own code
//! - Bounded retries of transport failures for idempotent requests
//! - Custom User-Agent header

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::common::{ApiError, ApiResult, ErrorCode};
use super::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::auth::Authentication;

const HTTPS_PREFIX: &str = "https://";
const HTTP_PREFIX: &str = "http://";

/// The main HTTP client for interacting with the Campaign Monitor API.
///
/// A `Client` is immutable once built. Cloning it is cheap and clones share
/// the same transport, so one client can serve many concurrent tasks as long
/// as the transport tolerates concurrent use.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use createsend::api::Client;
///
/// let client = Client::builder()
///     .api_key("your-api-key")
///     .build()?;
/// # Ok::<(), createsend::api::ApiError>(())
/// ```
///
/// # Making Requests
///
/// Resource methods live on the client itself (see [`crate::api::accounts`] and
/// friends). The generic verbs are public for endpoints not covered there:
///
/// ```rust,no_run
/// use createsend::api::Client;
/// use createsend::api::accounts::ClientSummary;
///
/// # async fn example(client: Client) -> Result<(), createsend::api::ApiError> {
/// let clients: Vec<ClientSummary> = client.fetch("clients.json").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    /// Parsed, normalized base URL that request paths resolve against
    base_url: Url,
    /// The transport performing the network round trip
    transport: Arc<dyn Transport>,
    /// Credentials stamped onto every request
    auth: Authentication,
    /// Extra attempts allowed for idempotent requests whose transport failed
    retry_count: u32,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("auth", &self.auth)
            .field("retry_count", &self.retry_count)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Builds a client from its three required parts.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::NilHttpClient`] when `transport` is `None`
    /// - Whatever [`Authentication::validate`] reports
    /// - [`ErrorCode::EmptyUrl`] when the base URL is blank or only a scheme
    /// - [`ErrorCode::InvalidUrl`] when the base URL does not parse
    pub fn new(
        base_url: &str,
        transport: Option<Arc<dyn Transport>>,
        auth: Authentication,
    ) -> ApiResult<Self> {
        let transport = transport.ok_or_else(|| ApiError::new(ErrorCode::NilHttpClient))?;
        auth.validate()?;
        let base_url = normalize_base_url(base_url)?;

        Ok(Self {
            base_url,
            transport,
            auth,
            retry_count: 0,
        })
    }

    /// Starts a [`ClientBuilder`] with the default base URL.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the base URL request paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn authentication(&self) -> &Authentication {
        &self.auth
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Resolves a relative path (which may carry a query string) against the
    /// base URL.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::EmptyUrl`] when the path is blank
    /// - [`ErrorCode::InvalidUrl`] when the path cannot be parsed as a reference,
    ///   or when it names another scheme, host or port
    pub fn resolve(&self, path: &str) -> ApiResult<Url> {
        let path = path.trim();
        if path.is_empty() {
            return Err(ApiError::new(ErrorCode::EmptyUrl));
        }
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::wrap(ErrorCode::InvalidUrl, e))?;
        if url.origin() != self.base_url.origin() {
            return Err(ApiError::with_message(
                ErrorCode::InvalidUrl.code(),
                format!(
                    "{}: {} is outside {}",
                    ErrorCode::InvalidUrl.message(),
                    url,
                    self.base_url
                ),
            ));
        }
        Ok(url)
    }

    /// Makes a GET request and decodes the response into `T`.
    ///
    /// An empty 2xx body yields `T::default()`.
    pub async fn fetch<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.execute::<()>(Method::GET, path, None).await?;
        decode_body(&response.body)
    }

    /// Makes a POST request with an optional JSON body.
    pub async fn create<T, B>(&self, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let response = self.execute(Method::POST, path, body).await?;
        decode_body(&response.body)
    }

    /// Makes a PUT request with an optional JSON body.
    pub async fn replace<T, B>(&self, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let response = self.execute(Method::PUT, path, body).await?;
        decode_body(&response.body)
    }

    /// Makes a DELETE request. Any response body is discarded.
    pub async fn remove(&self, path: &str) -> ApiResult<()> {
        self.execute::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Runs one request through the pipeline and returns the 2xx response.
    ///
    /// Non-2xx responses are turned into the server's [`ApiError`].
    pub async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;
        let payload = match body {
            Some(body) => Some(
                serde_json::to_vec(body)
                    .map_err(|e| ApiError::wrap(ErrorCode::InvalidRequestBody, e))?,
            ),
            None => None,
        };
        let request = self.build_request(method, url, payload)?;
        let response = self.dispatch(request).await?;
        check_status(response)
    }

    fn build_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> ApiResult<HttpRequest> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&crate::user_agent())
            .map_err(|e| ApiError::wrap(ErrorCode::Unknown, e))?;
        headers.insert(USER_AGENT, agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        self.auth.apply(&mut headers)?;

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    async fn dispatch(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let attempts = if is_idempotent(&request.method) {
            self.retry_count + 1
        } else {
            1
        };

        let mut attempt = 1;
        loop {
            tracing::debug!(
                method = %request.method,
                url = %request.url,
                attempt,
                "sending request"
            );
            match self.transport.send(request.clone()).await {
                Ok(response) => {
                    tracing::debug!(
                        method = %request.method,
                        url = %request.url,
                        status = response.status.as_u16(),
                        "received response"
                    );
                    return Ok(response);
                }
                Err(e) if attempt < attempts => {
                    tracing::warn!(
                        method = %request.method,
                        url = %request.url,
                        attempt,
                        "transport failed, retrying: {}",
                        e
                    );
                    attempt += 1;
                }
                Err(e) => return Err(ApiError::wrap(ErrorCode::Unknown, e)),
            }
        }
    }
}

/// Builder for [`Client`].
///
/// Credentials are mutually exclusive: whichever of [`api_key`](Self::api_key)
/// and [`oauth_token`](Self::oauth_token) is called last wins. When no
/// transport is supplied, [`build`](Self::build) creates a [`ReqwestTransport`]
/// honouring the configured timeout.
///
/// ```rust,no_run
/// use std::time::Duration;
/// use createsend::api::Client;
///
/// let client = Client::builder()
///     .base_url("api.createsend.com/api/v3.3/")
///     .oauth_token("access-token")
///     .retry_count(2)
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// assert_eq!(client.base_url().scheme(), "https");
/// # Ok::<(), createsend::api::ApiError>(())
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    default_transport: bool,
    auth: Authentication,
    retry_count: u32,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            default_transport: true,
            ..Default::default()
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn transport<T>(mut self, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Drops any transport and disables the default one, so `build` fails
    /// with [`ErrorCode::NilHttpClient`] unless a transport is set afterwards.
    pub fn without_transport(mut self) -> Self {
        self.transport = None;
        self.default_transport = false;
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.auth = Authentication::api_key(key);
        self
    }

    pub fn oauth_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Authentication::oauth(token);
        self
    }

    pub fn authentication(mut self, auth: Authentication) -> Self {
        self.auth = auth;
        self
    }

    pub fn retry_count(mut self, retries: u32) -> Self {
        self.retry_count = retries;
        self
    }

    /// Timeout applied by the default transport. Ignored when a transport is
    /// supplied explicitly.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates the options and builds the client.
    pub fn build(self) -> ApiResult<Client> {
        let transport = match self.transport {
            Some(transport) => Some(transport),
            None if self.default_transport => {
                let transport = ReqwestTransport::with_timeout(self.timeout)
                    .map_err(|e| ApiError::wrap(ErrorCode::Unknown, e))?;
                Some(Arc::new(transport) as Arc<dyn Transport>)
            }
            None => None,
        };
        let base_url = self
            .base_url
            .unwrap_or_else(|| crate::DEFAULT_BASE_URL.to_string());

        let mut client = Client::new(&base_url, transport, self.auth)?;
        client.retry_count = self.retry_count;
        Ok(client)
    }
}

/// Trims, lower-cases and forces an `https://` scheme onto the base URL.
fn normalize_base_url(raw: &str) -> ApiResult<Url> {
    let trimmed = raw.trim().to_lowercase();
    if trimmed.is_empty() {
        return Err(ApiError::new(ErrorCode::EmptyUrl));
    }

    let normalized = match trimmed.strip_prefix(HTTP_PREFIX) {
        Some(rest) => format!("{}{}", HTTPS_PREFIX, rest),
        None if trimmed.starts_with(HTTPS_PREFIX) => trimmed,
        None => format!("{}{}", HTTPS_PREFIX, trimmed),
    };
    if normalized == HTTPS_PREFIX {
        return Err(ApiError::new(ErrorCode::EmptyUrl));
    }

    let mut url =
        Url::parse(&normalized).map_err(|e| ApiError::wrap(ErrorCode::InvalidUrl, e))?;
    // Relative paths resolve beneath the last segment only with a trailing slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn is_idempotent(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::PUT | Method::DELETE | Method::HEAD)
}

/// Passes 2xx responses through and decodes everything else as an API error.
fn check_status(response: HttpResponse) -> ApiResult<HttpResponse> {
    if response.status.is_success() {
        return Ok(response);
    }

    match ApiError::from_response_body(&response.body) {
        Ok(err) => {
            tracing::debug!(
                status = response.status.as_u16(),
                code = err.code(),
                "server reported error"
            );
            Err(err)
        }
        Err(e) => Err(ApiError::wrap(ErrorCode::InvalidJson, e)),
    }
}

/// Decodes a success body; empty bodies and `null` yield the default value.
fn decode_body<T>(body: &[u8]) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    let trimmed = body.trim_ascii();
    if trimmed.is_empty() || trimmed == b"null" {
        return Ok(T::default());
    }
    serde_json::from_slice(trimmed).map_err(|e| ApiError::wrap(ErrorCode::InvalidJson, e))
}
