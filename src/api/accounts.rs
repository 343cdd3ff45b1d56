//
//  createsend
//  api/accounts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account-level API types and operations.
//!
//! The account is the top of the Campaign Monitor hierarchy: it owns clients,
//! administrators and billing. Everything here is reached with an account API
//! key or an OAuth token carrying account scope.
//!
//! # Example
//!
//! ```rust,no_run
//! use createsend::api::Client;
//!
//! # async fn example(client: Client) -> Result<(), createsend::api::ApiError> {
//! for summary in client.clients().await? {
//!     println!("{} ({})", summary.name, summary.id);
//! }
//! # Ok(())
//! # }
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::common::ApiResult;
use super::Client;
use crate::util::with_query;

/// A client as listed under the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientSummary {
    #[serde(rename = "ClientID")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,
}

/// Remaining credits on the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BillingDetails {
    #[serde(default)]
    pub credits: i64,
}

/// Server clock, in the account's time zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SystemDate {
    #[serde(default)]
    pub system_date: String,
}

/// An account administrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Administrator {
    pub email_address: String,

    #[serde(default)]
    pub name: String,

    /// `Active`, `Waiting to Accept the Invitation`, and so on.
    #[serde(default)]
    pub status: String,
}

/// Payload for adding or updating an administrator.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NewAdministrator {
    pub email_address: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AdministratorEmail {
    #[serde(default)]
    email_address: String,
}

/// The account's primary contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PrimaryContact {
    #[serde(default)]
    pub email_address: String,
}

/// Options for an external (single sign-on) session into the web app.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalSessionOptions {
    pub email: String,
    pub chrome: String,
    pub url: String,
    #[serde(rename = "IntegratorID")]
    pub integrator_id: String,
    #[serde(rename = "ClientID")]
    pub client_id: String,
}

/// Login URL returned for an external session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalSession {
    #[serde(default)]
    pub session_url: String,
}

impl Client {
    /// Lists every client in the account.
    pub async fn clients(&self) -> ApiResult<Vec<ClientSummary>> {
        self.fetch("clients.json").await
    }

    pub async fn billing_details(&self) -> ApiResult<BillingDetails> {
        self.fetch("billingdetails.json").await
    }

    /// Country names accepted wherever the API takes a country.
    pub async fn countries(&self) -> ApiResult<Vec<String>> {
        self.fetch("countries.json").await
    }

    /// Time zone names accepted wherever the API takes a time zone.
    pub async fn timezones(&self) -> ApiResult<Vec<String>> {
        self.fetch("timezones.json").await
    }

    pub async fn system_date(&self) -> ApiResult<SystemDate> {
        self.fetch("systemdate.json").await
    }

    pub async fn administrators(&self) -> ApiResult<Vec<Administrator>> {
        self.fetch("admins.json").await
    }

    pub async fn administrator(&self, email: &str) -> ApiResult<Administrator> {
        self.fetch(&with_query("admins.json", &[("email", email)])).await
    }

    /// Adds an administrator and returns the address the invitation went to.
    pub async fn add_administrator(&self, admin: &NewAdministrator) -> ApiResult<String> {
        let created: AdministratorEmail = self.create("admins.json", Some(admin)).await?;
        Ok(created.email_address)
    }

    /// Updates the administrator currently registered under `email`.
    pub async fn update_administrator(
        &self,
        email: &str,
        admin: &NewAdministrator,
    ) -> ApiResult<()> {
        let path = with_query("admins.json", &[("email", email)]);
        self.replace::<IgnoredAny, _>(&path, Some(admin)).await?;
        Ok(())
    }

    pub async fn delete_administrator(&self, email: &str) -> ApiResult<()> {
        self.remove(&with_query("admins.json", &[("email", email)])).await
    }

    pub async fn primary_contact(&self) -> ApiResult<PrimaryContact> {
        self.fetch("primarycontact.json").await
    }

    /// Makes `email` the primary contact. The address must belong to an
    /// administrator.
    pub async fn set_primary_contact(&self, email: &str) -> ApiResult<PrimaryContact> {
        let path = with_query("primarycontact.json", &[("email", email)]);
        self.replace::<_, ()>(&path, None).await
    }

    pub async fn external_session_url(
        &self,
        options: &ExternalSessionOptions,
    ) -> ApiResult<ExternalSession> {
        self.replace("externalsession.json", Some(options)).await
    }
}
