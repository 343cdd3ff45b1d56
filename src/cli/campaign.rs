//
//  createsend
//  cli/campaign.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Campaign commands
//!
//! ## Examples
//!
//! ```bash
//! # Headline statistics
//! cm campaign summary 5d6f...
//!
//! # Send a draft now, confirming to two addresses
//! cm campaign send 5d6f... --confirm-to me@example.com --confirm-to boss@example.com
//!
//! # Schedule it instead
//! cm campaign send 5d6f... --confirm-to me@example.com --at "2026-11-01 09:00"
//! ```

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Args, Subcommand};

use crate::api::campaigns::{CampaignSummary, SendOptions};
use crate::output::{print_field, print_header, TableOutput};
use crate::util::{format_api_date, parse_api_date};

use super::{api_client, GlobalOptions};

#[derive(Args, Debug)]
pub struct CampaignCommand {
    #[command(subcommand)]
    pub command: CampaignSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CampaignSubcommand {
    /// Show headline statistics for a sent campaign
    Summary(CampaignIdArgs),

    /// Send or schedule a draft campaign
    Send(SendArgs),

    /// Delete a campaign
    #[command(visible_alias = "rm")]
    Delete(CampaignIdArgs),
}

#[derive(Args, Debug)]
pub struct CampaignIdArgs {
    /// Campaign ID
    pub campaign_id: String,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Campaign ID
    pub campaign_id: String,

    /// Address to notify once the campaign is sent (repeatable, up to five)
    #[arg(long = "confirm-to", required = true, action = clap::ArgAction::Append)]
    pub confirm_to: Vec<String>,

    /// Schedule for this time ("YYYY-MM-DD HH:MM") instead of sending now
    #[arg(long, value_parser = parse_send_date)]
    pub at: Option<NaiveDateTime>,
}

fn parse_send_date(value: &str) -> std::result::Result<NaiveDateTime, String> {
    parse_api_date(value).map_err(|e| format!("expected YYYY-MM-DD HH:MM ({})", e))
}

impl TableOutput for CampaignSummary {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        print_field("Recipients", &self.recipients.to_string(), color);
        print_field(
            "Opened",
            &format!("{} ({} unique)", self.total_opened, self.unique_opened),
            color,
        );
        print_field("Clicks", &self.clicks.to_string(), color);
        print_field("Unsubscribed", &self.unsubscribed.to_string(), color);
        print_field("Bounced", &self.bounced.to_string(), color);
        print_field("Spam complaints", &self.spam_complaints.to_string(), color);
        print_field("Forwards", &self.forwards.to_string(), color);
        if !self.web_version_url.is_empty() {
            println!();
            print_field("Web version", &self.web_version_url, color);
        }
    }
}

impl CampaignCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = api_client()?;
        let output = global.output();

        match &self.command {
            CampaignSubcommand::Summary(args) => {
                output.write(&client.campaign_summary(&args.campaign_id).await?)
            }
            CampaignSubcommand::Send(args) => {
                let options = match &args.at {
                    Some(when) => SendOptions::at(when, &args.confirm_to),
                    None => SendOptions::immediately(&args.confirm_to),
                };
                client.send_campaign(&args.campaign_id, &options).await?;
                match &args.at {
                    Some(when) => output.write_success(&format!(
                        "Scheduled campaign {} for {}",
                        args.campaign_id,
                        format_api_date(when)
                    )),
                    None => output.write_success(&format!("Sent campaign {}", args.campaign_id)),
                }
                Ok(())
            }
            CampaignSubcommand::Delete(args) => {
                client.delete_campaign(&args.campaign_id).await?;
                output.write_success(&format!("Deleted campaign {}", args.campaign_id));
                Ok(())
            }
        }
    }
}
