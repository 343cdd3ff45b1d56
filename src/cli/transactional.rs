//
//  createsend
//  cli/transactional.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Transactional email commands
//!
//! ## Examples
//!
//! ```bash
//! cm transactional smart-emails --client 7c4e...
//! cm tx send-smart bb4a... --to "Joe <joe@example.com>" --data firstname=Joe --data points=120
//! ```

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde_json::Value;

use crate::api::transactional::{
    MessageReceipt, SmartEmailFilter, SmartEmailMessage, SmartEmailStatus, SmartEmailSummary,
};
use crate::output::{format_date, format_status, TableRow};

use super::{api_client, GlobalOptions};

#[derive(Args, Debug)]
pub struct TransactionalCommand {
    #[command(subcommand)]
    pub command: TransactionalSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TransactionalSubcommand {
    /// List smart emails
    #[command(name = "smart-emails")]
    SmartEmails(SmartEmailsArgs),

    /// Send a smart email
    #[command(name = "send-smart")]
    SendSmart(SendSmartArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    All,
    Draft,
    Active,
}

impl From<StatusArg> for SmartEmailStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::All => SmartEmailStatus::All,
            StatusArg::Draft => SmartEmailStatus::Draft,
            StatusArg::Active => SmartEmailStatus::Active,
        }
    }
}

#[derive(Args, Debug)]
pub struct SmartEmailsArgs {
    /// Client ID (required with an account-level API key)
    #[arg(long)]
    pub client: Option<String>,

    /// Filter by status
    #[arg(long, value_enum, default_value = "all")]
    pub status: StatusArg,
}

#[derive(Args, Debug)]
pub struct SendSmartArgs {
    /// Smart email ID
    pub smart_email_id: String,

    /// Recipient, as "Name <address>" or a bare address (repeatable)
    #[arg(long, required = true, action = clap::ArgAction::Append)]
    pub to: Vec<String>,

    /// Template variable as key=value; values that parse as JSON are sent as JSON (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub data: Vec<String>,

    /// Also add recipients to the smart email's list
    #[arg(long)]
    pub add_to_list: bool,
}

impl SendSmartArgs {
    fn message(&self) -> Result<SmartEmailMessage> {
        let mut data = BTreeMap::new();
        for field in &self.data {
            let (key, value) = parse_data_field(field)?;
            data.insert(key, value);
        }
        Ok(SmartEmailMessage {
            to: self.to.clone(),
            data,
            add_recipients_to_list: self.add_to_list,
            ..Default::default()
        })
    }
}

/// Splits `key=value`, reading the value as JSON when it parses and as a
/// string otherwise.
fn parse_data_field(field: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = field.split_once('=') else {
        bail!("Invalid data format: {}. Expected key=value", field);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid data format: {}. Key is empty", field);
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

impl TableRow for SmartEmailSummary {
    fn headers() -> &'static [&'static str] {
        &["Smart email ID", "Name", "Status", "Created"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format_status(&self.status, color),
            format_date(self.created_at.as_ref()),
        ]
    }
}

impl TableRow for MessageReceipt {
    fn headers() -> &'static [&'static str] {
        &["Message ID", "Recipient", "Status"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.message_id.clone(),
            self.recipient.clone(),
            format_status(&self.status, color),
        ]
    }
}

impl TransactionalCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let output = global.output();

        match &self.command {
            TransactionalSubcommand::SmartEmails(args) => {
                let client = api_client()?;
                let filter = SmartEmailFilter {
                    status: args.status.into(),
                    client_id: args.client.clone(),
                };
                output.write_list(&client.smart_emails(&filter).await?)
            }
            TransactionalSubcommand::SendSmart(args) => {
                let message = args.message()?;
                let client = api_client()?;
                let receipts = client.send_smart_email(&args.smart_email_id, &message).await?;
                output.write_list(&receipts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_field() {
        assert_eq!(
            parse_data_field("name=Joe").unwrap(),
            ("name".to_string(), Value::String("Joe".to_string()))
        );
        assert_eq!(
            parse_data_field("points=120").unwrap(),
            ("points".to_string(), serde_json::json!(120))
        );
        assert_eq!(
            parse_data_field("expr=a=b").unwrap(),
            ("expr".to_string(), Value::String("a=b".to_string()))
        );
        assert!(parse_data_field("novalue").is_err());
        assert!(parse_data_field("=x").is_err());
    }

    #[test]
    fn test_message_from_args() {
        let args = SendSmartArgs {
            smart_email_id: "se".to_string(),
            to: vec!["a@example.com".to_string()],
            data: vec!["vip=true".to_string()],
            add_to_list: true,
        };
        let message = args.message().unwrap();
        assert_eq!(message.to, vec!["a@example.com".to_string()]);
        assert_eq!(message.data["vip"], Value::Bool(true));
        assert!(message.add_recipients_to_list);
    }
}
