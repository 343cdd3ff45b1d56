//
//  createsend
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Campaign Monitor Client Library
//!
//! A typed client for the Campaign Monitor (createsend) email marketing REST
//! API, plus the `cm` command-line tool built on top of it.
//!
//! ## Overview
//!
//! Every call goes through a single request pipeline: the relative path is
//! resolved against the base URL, the body is serialized to JSON, the user
//! agent and credentials are attached, the request is handed to a pluggable
//! [`Transport`](api::Transport), and the response is decoded into a typed
//! value or a single [`ApiError`](api::ApiError).
//!
//! ## Features
//!
//! - **Authentication**: API keys (HTTP Basic) and OAuth access tokens (Bearer)
//! - **Pluggable Transport**: reqwest by default, any async implementation in tests
//! - **One Error Type**: client-side failures and server-reported errors share
//!   [`ApiError`](api::ApiError) and compare by code
//! - **Resource Facades**: accounts, clients, campaigns and transactional email
//!
//! ## Module Structure
//!
//! - [`api`]: The client, transport seam, error type and resource operations
//! - [`auth`]: Credentials and how they are written onto requests
//! - [`config`]: Configuration file and environment loading
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//! - [`util`]: Date and path helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use createsend::api::Client;
//!
//! # async fn example() -> Result<(), createsend::api::ApiError> {
//! let client = Client::builder().api_key("your-api-key").build()?;
//! for summary in client.clients().await? {
//!     println!("{}: {}", summary.id, summary.name);
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains the `cm` commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// Campaign Monitor API client.
///
/// The request pipeline, the [`Transport`](api::Transport) seam, the shared
/// error type and one module of operations per resource.
pub mod api;

/// Authentication credentials.
///
/// An API key is sent as HTTP Basic auth, an OAuth access token as a Bearer
/// token.
pub mod auth;

/// Configuration file management.
///
/// Settings are read from platform-specific locations and overridden by
/// `CREATESEND_*` environment variables:
/// - Linux: `~/.config/createsend/config.toml`
/// - macOS: `~/Library/Application Support/createsend/config.toml`
/// - Windows: `%APPDATA%\createsend\config.toml`
pub mod config;

/// Output formatting for the CLI.
pub mod output;

/// Utility functions: API date handling and path building.
pub mod util;

pub use api::{ApiError, ApiResult, Client, ClientBuilder, ErrorCode};
pub use auth::Authentication;
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary.
pub const APP_NAME: &str = "cm";

/// Library version, taken from Cargo.toml at compile time.
///
/// ```rust
/// use createsend::VERSION;
///
/// assert!(!VERSION.is_empty());
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL used when none is configured.
///
/// The trailing slash matters: relative paths resolve beneath `v3.3/`.
pub const DEFAULT_BASE_URL: &str = "https://api.createsend.com/api/v3.3/";

/// The `User-Agent` sent with every request.
///
/// ```rust
/// assert!(createsend::user_agent().starts_with("createsend-rs/"));
/// ```
pub fn user_agent() -> String {
    format!("createsend-rs/{}", VERSION)
}

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1`: General error
/// - `2`: Invalid usage (reported by clap)
/// - `4`: Missing or rejected credentials
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// The command failed; details are printed to stderr.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// No credentials were configured, or the configured ones are empty.
    pub const AUTH_ERROR: i32 = 4;
}
