//
//  createsend
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends an authenticated request through the same pipeline the typed
//! commands use and prints the response body. Useful for endpoints that have
//! no dedicated command.
//!
//! ## Examples
//!
//! ```bash
//! # List clients
//! cm api clients.json
//!
//! # Create a list from a JSON file
//! cm api -X POST lists/7c4e....json --input list.json
//!
//! # Build a small body inline
//! cm api -X PUT campaigns/5d6f.../unschedule.json -F Reason=holiday
//! ```

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Args;
use reqwest::Method;
use serde_json::Value;

use crate::output::pretty_body;

use super::{api_client, GlobalOptions};

#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Path relative to the API base URL, e.g. `clients.json`
    pub endpoint: String,

    /// HTTP method
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Body field as key=value; values that parse as JSON are sent as JSON (repeatable)
    #[arg(long, short = 'F', action = clap::ArgAction::Append, conflicts_with = "input")]
    pub field: Vec<String>,

    /// Read the JSON body from a file ("-" for stdin)
    #[arg(long, short = 'f')]
    pub input: Option<String>,
}

impl ApiCommand {
    pub async fn run(&self, _global: &GlobalOptions) -> Result<()> {
        let method = self.parse_method()?;
        let body = self.build_body()?;
        let client = api_client()?;

        let response = client
            .execute(method, &self.endpoint, body.as_ref())
            .await
            .with_context(|| format!("Request to {} failed", self.endpoint))?;

        let text = pretty_body(&response.body);
        if !text.is_empty() {
            println!("{}", text);
        }
        Ok(())
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
            };
            let value = serde_json::from_str(&content)
                .with_context(|| format!("{} does not contain valid JSON", input))?;
            return Ok(Some(value));
        }

        if self.field.is_empty() {
            return Ok(None);
        }

        let mut body = serde_json::Map::new();
        for field in &self.field {
            let Some((key, raw)) = field.split_once('=') else {
                bail!("Invalid field format: {}. Expected key=value", field);
            };
            let value =
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
            body.insert(key.to_string(), value);
        }
        Ok(Some(Value::Object(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(method: &str, field: &[&str], input: Option<String>) -> ApiCommand {
        ApiCommand {
            endpoint: "clients.json".to_string(),
            method: method.to_string(),
            field: field.iter().map(|f| f.to_string()).collect(),
            input,
        }
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(command("post", &[], None).parse_method().unwrap(), Method::POST);
        assert!(command("PATCH", &[], None).parse_method().is_err());
    }

    #[test]
    fn test_body_from_fields() {
        let body = command("POST", &["Name=Acme", "Count=3"], None)
            .build_body()
            .unwrap()
            .unwrap();
        assert_eq!(body, serde_json::json!({"Name": "Acme", "Count": 3}));
        assert!(command("GET", &[], None).build_body().unwrap().is_none());
    }

    #[test]
    fn test_body_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.json");
        fs::write(&path, r#"{"Title":"List"}"#).unwrap();

        let body = command("POST", &[], Some(path.display().to_string()))
            .build_body()
            .unwrap();
        assert_eq!(body, Some(serde_json::json!({"Title": "List"})));

        fs::write(&path, "not json").unwrap();
        assert!(command("POST", &[], Some(path.display().to_string()))
            .build_body()
            .is_err());
    }
}
