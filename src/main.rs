//
//  createsend
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use createsend::api::{ApiError, ErrorCode};
use createsend::cli::{Cli, Commands};
use createsend::exit_codes;
use createsend::output::{OutputFormat, OutputWriter};

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS
            };
            std::process::exit(code);
        }
    };

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::new(OutputFormat::Table).write_error(&format!("{e:#}"));
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("CM_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps credential problems to their own exit code
fn exit_code_for(err: &anyhow::Error) -> i32 {
    let credential_error = err.chain().any(|cause| {
        cause.downcast_ref::<ApiError>().is_some_and(|api| {
            matches!(
                api.kind(),
                Some(
                    ErrorCode::AuthenticationNotSet
                        | ErrorCode::EmptyApiKey
                        | ErrorCode::EmptyOAuthToken
                )
            )
        })
    });
    if credential_error {
        exit_codes::AUTH_ERROR
    } else {
        exit_codes::ERROR
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Account(cmd) => cmd.run(&cli.global).await,
        Commands::Client(cmd) => cmd.run(&cli.global).await,
        Commands::Campaign(cmd) => cmd.run(&cli.global).await,
        Commands::Transactional(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("cm version {}", createsend::VERSION);
            Ok(())
        }
    }
}
