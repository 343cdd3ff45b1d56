//
//  createsend
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides a typed client for the Campaign Monitor REST API
//! (v3.3, `api.createsend.com`).
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: The request pipeline ([`Client`]) and its [`ClientBuilder`]
//! - [`transport`]: The [`Transport`] seam and its default reqwest-backed implementation
//! - [`common`]: Shared types (errors, error codes, paged results)
//! - [`accounts`], [`clients`], [`campaigns`], [`transactional`]: Resource
//!   operations, implemented as methods on [`Client`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use createsend::api::Client;
//!
//! # async fn example() -> Result<(), createsend::api::ApiError> {
//! let client = Client::builder().api_key("your-api-key").build()?;
//! let billing = client.billing_details().await?;
//! println!("{} credits left", billing.credits);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiResult`]. Errors produced by the library carry
//! a negative [`ErrorCode`]; errors reported by the server carry the server's
//! own code and message. Two errors compare equal when their codes match.

/// Account-level operations: clients, billing, administrators.
pub mod accounts;

/// Campaign creation, sending and reporting.
pub mod campaigns;

/// The request pipeline.
pub mod client;

/// Client (sub-account) operations.
pub mod clients;

/// Shared types: [`ApiError`], [`ErrorCode`], [`PagedResult`].
pub mod common;

/// Smart and classic transactional email.
pub mod transactional;

/// The HTTP seam between the pipeline and the network.
pub mod transport;

pub use client::{Client, ClientBuilder};
pub use common::{ApiError, ApiResult, ErrorCode, OrderDirection, PageQuery, PagedResult};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
