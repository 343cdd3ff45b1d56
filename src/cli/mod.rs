//
//  createsend
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod account;
mod api;
mod campaign;
mod client;
mod transactional;

pub use account::AccountCommand;
pub use api::ApiCommand;
pub use campaign::CampaignCommand;
pub use client::ClientCommand;
pub use transactional::TransactionalCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::{ApiError, Client, ErrorCode};
use crate::config::{Config, ENV_API_KEY, ENV_OAUTH_TOKEN};
use crate::output::{OutputFormat, OutputWriter};

/// Work with Campaign Monitor from the command line
#[derive(Parser, Debug)]
#[command(
    name = "cm",
    version,
    about = "Work with Campaign Monitor from the command line",
    long_about = "cm is a CLI for the Campaign Monitor API.\n\n\
                  It covers accounts, clients, campaigns and transactional email.",
    propagate_version = true,
    after_help = "Use 'cm <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    pub fn output(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account-level information
    #[command(visible_alias = "acct")]
    Account(AccountCommand),

    /// Inspect a client
    Client(ClientCommand),

    /// Report on, send and delete campaigns
    Campaign(CampaignCommand),

    /// Smart transactional email
    #[command(visible_alias = "tx")]
    Transactional(TransactionalCommand),

    /// Make an authenticated API request
    Api(ApiCommand),

    /// Show version information
    Version,
}

/// Builds an API client from the config file and environment.
pub(crate) fn api_client() -> Result<Client> {
    let config = Config::load().context("Failed to load configuration")?;
    if !config.has_credentials() {
        let location = Config::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "config.toml".to_string());
        return Err(ApiError::new(ErrorCode::AuthenticationNotSet)).with_context(|| {
            format!(
                "No credentials configured. Set {} or {}, or add api_key to {}",
                ENV_API_KEY, ENV_OAUTH_TOKEN, location
            )
        });
    }
    let client = config
        .client_builder()
        .build()
        .context("Failed to create API client")?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_flag_is_global() {
        let cli = Cli::try_parse_from(["cm", "account", "clients", "--json"]).unwrap();
        assert!(cli.global.json);
        assert!(matches!(cli.command, Commands::Account(_)));
    }
}
