//
//  createsend
//  cli/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account commands
//!
//! Read-only views of the account: its clients, credits, administrators, and
//! the reference lists (countries, time zones) other commands accept.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::accounts::{Administrator, BillingDetails, ClientSummary, SystemDate};
use crate::output::{format_status, print_field, TableOutput, TableRow};

use super::{api_client, GlobalOptions};

#[derive(Args, Debug)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountSubcommand {
    /// List clients in the account
    #[command(visible_alias = "ls")]
    Clients,

    /// Show remaining credits
    Billing,

    /// List valid country names
    Countries,

    /// List valid time zone names
    Timezones,

    /// Show the server's current date
    Date,

    /// List account administrators
    Admins,
}

impl TableRow for ClientSummary {
    fn headers() -> &'static [&'static str] {
        &["Client ID", "Name"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let id = if color {
            style(&self.id).dim().to_string()
        } else {
            self.id.clone()
        };
        vec![id, self.name.clone()]
    }
}

impl TableRow for Administrator {
    fn headers() -> &'static [&'static str] {
        &["Email", "Name", "Status"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.email_address.clone(),
            self.name.clone(),
            format_status(&self.status, color),
        ]
    }
}

impl TableOutput for BillingDetails {
    fn print_table(&self, color: bool) {
        print_field("Credits", &self.credits.to_string(), color);
    }
}

impl TableOutput for SystemDate {
    fn print_table(&self, color: bool) {
        print_field("System date", &self.system_date, color);
    }
}

impl AccountCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = api_client()?;
        let output = global.output();

        match &self.command {
            AccountSubcommand::Clients => output.write_list(&client.clients().await?),
            AccountSubcommand::Billing => output.write(&client.billing_details().await?),
            AccountSubcommand::Countries => output.write_list(&client.countries().await?),
            AccountSubcommand::Timezones => output.write_list(&client.timezones().await?),
            AccountSubcommand::Date => output.write(&client.system_date().await?),
            AccountSubcommand::Admins => output.write_list(&client.administrators().await?),
        }
    }
}
