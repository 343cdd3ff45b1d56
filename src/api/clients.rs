//
//  createsend
//  api/clients.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client API types and operations.
//!
//! A client is a company the account sends email on behalf of. Campaigns,
//! subscriber lists, segments and templates all belong to a client.
//!
//! # Hierarchy
//!
//! ```text
//! Account
//! └── Client
//!     ├── Campaigns (sent, scheduled, drafts)
//!     ├── Lists
//!     │   └── Segments
//!     ├── Templates
//!     └── Suppression list
//! ```

use chrono::NaiveDateTime;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ApiResult, PagedResult, PageQuery};
use super::Client;
use crate::util::{api_date, escape_segment, with_query};

/// Payload for creating a client.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NewClient {
    pub company_name: String,
    /// One of the names returned by [`Client::countries`].
    pub country: String,
    /// One of the names returned by [`Client::timezones`].
    pub time_zone: String,
}

/// Basic company details of a client. Also the payload for
/// [`Client::set_client_basics`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ClientBasics {
    #[serde(rename = "ClientID", default, skip_serializing)]
    pub id: String,

    pub company_name: String,

    pub country: String,

    pub time_zone: String,
}

/// Billing configuration of a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClientBilling {
    pub can_purchase_credits: bool,
    pub client_pays: bool,
    pub currency: String,
    pub markup_percentage: f64,
    pub credits: i64,
    pub base_rate_per_recipient: f64,
    pub base_delivery_rate: f64,
    pub monthly_scheme: String,
}

/// Full details of a client, as returned by [`Client::client`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ClientDetails {
    #[serde(rename = "ApiKey", default)]
    pub api_key: String,

    #[serde(default)]
    pub basic_details: ClientBasics,

    #[serde(default)]
    pub billing_details: ClientBilling,
}

/// A campaign that has been sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SentCampaign {
    #[serde(rename = "CampaignID")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub from_name: String,

    #[serde(default)]
    pub from_email: String,

    #[serde(default)]
    pub reply_to: String,

    #[serde(rename = "WebVersionURL", default)]
    pub web_version_url: String,

    #[serde(with = "api_date::option", default)]
    pub sent_date: Option<NaiveDateTime>,

    #[serde(default)]
    pub total_recipients: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// A campaign waiting for its send date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledCampaign {
    #[serde(rename = "CampaignID")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub subject: String,

    #[serde(with = "api_date::option", default)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(with = "api_date::option", default)]
    pub date_scheduled: Option<NaiveDateTime>,

    #[serde(default)]
    pub scheduled_time_zone: String,

    #[serde(rename = "PreviewURL", default)]
    pub preview_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// A campaign that has not been scheduled or sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DraftCampaign {
    #[serde(rename = "CampaignID")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub from_name: String,

    #[serde(default)]
    pub from_email: String,

    #[serde(with = "api_date::option", default)]
    pub date_created: Option<NaiveDateTime>,

    #[serde(rename = "PreviewURL", default)]
    pub preview_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// A subscriber list belonging to a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListSummary {
    #[serde(rename = "ListID")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,
}

/// A segment of one of the client's lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SegmentSummary {
    #[serde(rename = "ListID")]
    pub list_id: String,

    #[serde(rename = "SegmentID")]
    pub id: String,

    #[serde(rename = "Title", default)]
    pub title: String,
}

/// A template available to the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemplateSummary {
    #[serde(rename = "TemplateID")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "PreviewURL", default)]
    pub preview_url: String,

    #[serde(rename = "ScreenshotURL", default)]
    pub screenshot_url: String,
}

/// An address on the client's suppression list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SuppressedSubscriber {
    pub email_address: String,

    #[serde(default)]
    pub suppression_reason: String,

    #[serde(with = "api_date::option", default)]
    pub date: Option<NaiveDateTime>,

    #[serde(default)]
    pub state: String,
}

/// A person with access to the client's account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    pub email_address: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub access_level: i64,

    #[serde(default)]
    pub status: String,
}

fn client_path(client_id: &str, rest: &str) -> ApiResult<String> {
    Ok(format!("clients/{}{}", escape_segment(client_id)?, rest))
}

impl Client {
    /// Creates a client and returns its ID.
    pub async fn create_client(&self, client: &NewClient) -> ApiResult<String> {
        self.create("clients.json", Some(client)).await
    }

    pub async fn client(&self, client_id: &str) -> ApiResult<ClientDetails> {
        self.fetch(&client_path(client_id, ".json")?).await
    }

    pub async fn delete_client(&self, client_id: &str) -> ApiResult<()> {
        self.remove(&client_path(client_id, ".json")?).await
    }

    pub async fn set_client_basics(&self, client_id: &str, basics: &ClientBasics) -> ApiResult<()> {
        let path = client_path(client_id, "/setbasics.json")?;
        self.replace::<IgnoredAny, _>(&path, Some(basics)).await?;
        Ok(())
    }

    pub async fn sent_campaigns(&self, client_id: &str) -> ApiResult<Vec<SentCampaign>> {
        self.fetch(&client_path(client_id, "/campaigns.json")?).await
    }

    pub async fn scheduled_campaigns(&self, client_id: &str) -> ApiResult<Vec<ScheduledCampaign>> {
        self.fetch(&client_path(client_id, "/scheduled.json")?).await
    }

    pub async fn draft_campaigns(&self, client_id: &str) -> ApiResult<Vec<DraftCampaign>> {
        self.fetch(&client_path(client_id, "/drafts.json")?).await
    }

    pub async fn client_lists(&self, client_id: &str) -> ApiResult<Vec<ListSummary>> {
        self.fetch(&client_path(client_id, "/lists.json")?).await
    }

    pub async fn client_segments(&self, client_id: &str) -> ApiResult<Vec<SegmentSummary>> {
        self.fetch(&client_path(client_id, "/segments.json")?).await
    }

    pub async fn client_templates(&self, client_id: &str) -> ApiResult<Vec<TemplateSummary>> {
        self.fetch(&client_path(client_id, "/templates.json")?).await
    }

    pub async fn client_people(&self, client_id: &str) -> ApiResult<Vec<Person>> {
        self.fetch(&client_path(client_id, "/people.json")?).await
    }

    pub async fn suppression_list(
        &self,
        client_id: &str,
        query: &PageQuery,
    ) -> ApiResult<PagedResult<SuppressedSubscriber>> {
        let path = client_path(client_id, "/suppressionlist.json")?;
        self.fetch(&with_query(&path, &query.to_pairs())).await
    }
}
