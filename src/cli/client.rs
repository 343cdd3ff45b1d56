//
//  createsend
//  cli/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client commands
//!
//! A client is a sub-account holding its own lists, templates and campaigns.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::clients::{
    ClientDetails, DraftCampaign, ListSummary, ScheduledCampaign, SentCampaign,
};
use crate::output::{format_bool, format_date, print_field, print_header, TableOutput, TableRow};
use crate::util::truncate;

use super::{api_client, GlobalOptions};

#[derive(Args, Debug)]
pub struct ClientCommand {
    #[command(subcommand)]
    pub command: ClientSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ClientSubcommand {
    /// Show a client's details and billing
    View(ClientIdArgs),

    /// List a client's campaigns (sent, by default)
    Campaigns(CampaignsArgs),

    /// List a client's subscriber lists
    Lists(ClientIdArgs),
}

#[derive(Args, Debug)]
pub struct ClientIdArgs {
    /// Client ID
    pub client_id: String,
}

#[derive(Args, Debug)]
pub struct CampaignsArgs {
    /// Client ID
    pub client_id: String,

    /// Show drafts instead of sent campaigns
    #[arg(long, conflicts_with = "scheduled")]
    pub drafts: bool,

    /// Show scheduled campaigns instead of sent campaigns
    #[arg(long)]
    pub scheduled: bool,
}

impl TableOutput for ClientDetails {
    fn print_table(&self, color: bool) {
        let basics = &self.basic_details;
        let billing = &self.billing_details;

        print_header(&basics.company_name);
        print_field("Client ID", &basics.id, color);
        print_field("Country", &basics.country, color);
        print_field("Time zone", &basics.time_zone, color);
        println!();
        print_field("Credits", &billing.credits.to_string(), color);
        print_field("Currency", &billing.currency, color);
        print_field("Client pays", &format_bool(billing.client_pays, color), color);
        print_field(
            "Can buy credits",
            &format_bool(billing.can_purchase_credits, color),
            color,
        );
        if !billing.monthly_scheme.is_empty() {
            print_field("Monthly scheme", &billing.monthly_scheme, color);
        }
    }
}

impl TableRow for SentCampaign {
    fn headers() -> &'static [&'static str] {
        &["Campaign ID", "Name", "Subject", "Sent", "Recipients"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let id = if color {
            style(&self.id).dim().to_string()
        } else {
            self.id.clone()
        };
        vec![
            id,
            self.name.clone(),
            truncate(&self.subject, 40),
            format_date(self.sent_date.as_ref()),
            self.total_recipients.to_string(),
        ]
    }
}

impl TableRow for ScheduledCampaign {
    fn headers() -> &'static [&'static str] {
        &["Campaign ID", "Name", "Subject", "Scheduled", "Time zone"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            truncate(&self.subject, 40),
            format_date(self.date_scheduled.as_ref()),
            self.scheduled_time_zone.clone(),
        ]
    }
}

impl TableRow for DraftCampaign {
    fn headers() -> &'static [&'static str] {
        &["Campaign ID", "Name", "Subject", "Created"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            truncate(&self.subject, 40),
            format_date(self.date_created.as_ref()),
        ]
    }
}

impl TableRow for ListSummary {
    fn headers() -> &'static [&'static str] {
        &["List ID", "Name"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![self.id.clone(), self.name.clone()]
    }
}

impl ClientCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = api_client()?;
        let output = global.output();

        match &self.command {
            ClientSubcommand::View(args) => output.write(&client.client(&args.client_id).await?),
            ClientSubcommand::Campaigns(args) if args.drafts => {
                output.write_list(&client.draft_campaigns(&args.client_id).await?)
            }
            ClientSubcommand::Campaigns(args) if args.scheduled => {
                output.write_list(&client.scheduled_campaigns(&args.client_id).await?)
            }
            ClientSubcommand::Campaigns(args) => {
                output.write_list(&client.sent_campaigns(&args.client_id).await?)
            }
            ClientSubcommand::Lists(args) => {
                output.write_list(&client.client_lists(&args.client_id).await?)
            }
        }
    }
}
