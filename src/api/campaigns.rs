//
//  createsend
//  api/campaigns.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Campaign API types and operations.
//!
//! Covers the campaign lifecycle (create, preview, send, unschedule, delete)
//! and the reporting endpoints available once a campaign has been sent.
//!
//! # Lifecycle
//!
//! ```text
//! create_campaign ──► draft ──► send_campaign ──► scheduled ──► sent
//!                       ▲                            │
//!                       └──── unschedule_campaign ◄──┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use createsend::api::Client;
//! use createsend::api::campaigns::SendOptions;
//!
//! # async fn example(client: Client) -> Result<(), createsend::api::ApiError> {
//! client
//!     .send_campaign("campaign-id", &SendOptions::immediately(["me@example.com"]))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDateTime;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ApiResult, PagedResult, PageQuery};
use super::Client;
use crate::util::{api_date, escape_segment, format_api_date, with_query};

/// Payload for creating a campaign from hosted HTML content.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NewCampaign {
    pub subject: String,
    pub name: String,
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    #[serde(rename = "HtmlUrl")]
    pub html_url: String,
    #[serde(rename = "TextUrl", skip_serializing_if = "Option::is_none")]
    pub text_url: Option<String>,
    #[serde(rename = "ListIDs")]
    pub list_ids: Vec<String>,
    #[serde(rename = "SegmentIDs")]
    pub segment_ids: Vec<String>,
}

/// When and to whom confirmation of a send goes.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SendOptions {
    /// Addresses notified once the campaign has been sent. Up to five.
    pub confirmation_email: String,
    /// `Immediately`, or a `YYYY-MM-DD HH:MM` timestamp in the client's time zone.
    pub send_date: String,
}

impl SendOptions {
    pub fn immediately<I, S>(confirmation: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            confirmation_email: join_addresses(confirmation),
            send_date: "Immediately".to_string(),
        }
    }

    pub fn at<I, S>(when: &NaiveDateTime, confirmation: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            confirmation_email: join_addresses(confirmation),
            send_date: format_api_date(when),
        }
    }
}

fn join_addresses<I, S>(addresses: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    addresses
        .into_iter()
        .map(|a| a.as_ref().trim().to_string())
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Payload for sending a preview of a draft.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PreviewOptions {
    pub preview_recipients: Vec<String>,
    /// How to fill personalization tags: `Fallback`, `Random`, or an address on the list.
    pub personalize: String,
}

/// Headline statistics of a sent campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct CampaignSummary {
    pub name: String,
    pub recipients: u64,
    pub total_opened: u64,
    pub clicks: u64,
    pub unsubscribed: u64,
    pub bounced: u64,
    pub unique_opened: u64,
    pub spam_complaints: u64,
    pub forwards: u64,
    pub likes: u64,
    pub mentions: u64,
    #[serde(rename = "WebVersionURL")]
    pub web_version_url: String,
    #[serde(rename = "WebVersionTextURL")]
    pub web_version_text_url: String,
    #[serde(rename = "WorldviewURL")]
    pub worldview_url: String,
}

/// Share of opens per email client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct EmailClientUsage {
    pub client: String,
    pub version: String,
    pub percentage: f64,
    pub subscribers: u64,
}

/// Lists and segments a campaign was sent to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ListsAndSegments {
    #[serde(default, deserialize_with = "null_as_default")]
    pub lists: Vec<super::clients::ListSummary>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<super::clients::SegmentSummary>,
}

/// A recipient of a sent campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Recipient {
    pub email_address: String,

    #[serde(rename = "ListID", default)]
    pub list_id: String,
}

/// One subscriber action on a sent campaign: an open, click, unsubscribe,
/// spam complaint or bounce.
///
/// Only the fields relevant to the action are populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CampaignActivity {
    pub email_address: String,

    #[serde(rename = "ListID", default)]
    pub list_id: String,

    #[serde(with = "api_date::option", default)]
    pub date: Option<NaiveDateTime>,

    #[serde(rename = "IPAddress", default)]
    pub ip_address: String,

    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub country_code: String,

    #[serde(default)]
    pub country_name: String,

    /// Clicked link, for clicks.
    #[serde(rename = "URL", default)]
    pub url: String,

    /// Bounce classification, for bounces.
    #[serde(default)]
    pub bounce_type: String,

    /// Bounce reason, for bounces.
    #[serde(default)]
    pub reason: String,
}

/// Which per-subscriber report of a campaign to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Opens,
    Clicks,
    Unsubscribes,
    SpamComplaints,
    Bounces,
}

impl ActivityKind {
    fn endpoint(self) -> &'static str {
        match self {
            Self::Opens => "opens",
            Self::Clicks => "clicks",
            Self::Unsubscribes => "unsubscribes",
            Self::SpamComplaints => "spam",
            Self::Bounces => "bounces",
        }
    }
}

fn campaign_path(campaign_id: &str, rest: &str) -> ApiResult<String> {
    Ok(format!("campaigns/{}{}", escape_segment(campaign_id)?, rest))
}

impl Client {
    /// Creates a draft campaign for a client and returns its ID.
    pub async fn create_campaign(
        &self,
        client_id: &str,
        campaign: &NewCampaign,
    ) -> ApiResult<String> {
        self.create(&campaign_path(client_id, ".json")?, Some(campaign)).await
    }

    /// Sends or schedules a draft.
    pub async fn send_campaign(&self, campaign_id: &str, options: &SendOptions) -> ApiResult<()> {
        let path = campaign_path(campaign_id, "/send.json")?;
        self.create::<IgnoredAny, _>(&path, Some(options)).await?;
        Ok(())
    }

    pub async fn send_campaign_preview(
        &self,
        campaign_id: &str,
        options: &PreviewOptions,
    ) -> ApiResult<()> {
        let path = campaign_path(campaign_id, "/sendpreview.json")?;
        self.create::<IgnoredAny, _>(&path, Some(options)).await?;
        Ok(())
    }

    /// Moves a scheduled campaign back to drafts.
    pub async fn unschedule_campaign(&self, campaign_id: &str) -> ApiResult<()> {
        let path = campaign_path(campaign_id, "/unschedule.json")?;
        self.create::<IgnoredAny, ()>(&path, None).await?;
        Ok(())
    }

    pub async fn delete_campaign(&self, campaign_id: &str) -> ApiResult<()> {
        self.remove(&campaign_path(campaign_id, ".json")?).await
    }

    pub async fn campaign_summary(&self, campaign_id: &str) -> ApiResult<CampaignSummary> {
        self.fetch(&campaign_path(campaign_id, "/summary.json")?).await
    }

    pub async fn campaign_email_client_usage(
        &self,
        campaign_id: &str,
    ) -> ApiResult<Vec<EmailClientUsage>> {
        self.fetch(&campaign_path(campaign_id, "/emailclientusage.json")?).await
    }

    pub async fn campaign_lists_and_segments(
        &self,
        campaign_id: &str,
    ) -> ApiResult<ListsAndSegments> {
        self.fetch(&campaign_path(campaign_id, "/listsandsegments.json")?).await
    }

    pub async fn campaign_recipients(
        &self,
        campaign_id: &str,
        query: &PageQuery,
    ) -> ApiResult<PagedResult<Recipient>> {
        let path = campaign_path(campaign_id, "/recipients.json")?;
        self.fetch(&with_query(&path, &query.to_pairs())).await
    }

    /// Reads one of the per-subscriber activity reports.
    pub async fn campaign_activity(
        &self,
        campaign_id: &str,
        kind: ActivityKind,
        query: &PageQuery,
    ) -> ApiResult<PagedResult<CampaignActivity>> {
        let rest = format!("/{}.json", kind.endpoint());
        let path = with_query(&campaign_path(campaign_id, &rest)?, &query.to_pairs());
        self.fetch(&path).await
    }

    pub async fn campaign_opens(
        &self,
        campaign_id: &str,
        query: &PageQuery,
    ) -> ApiResult<PagedResult<CampaignActivity>> {
        self.campaign_activity(campaign_id, ActivityKind::Opens, query).await
    }

    pub async fn campaign_clicks(
        &self,
        campaign_id: &str,
        query: &PageQuery,
    ) -> ApiResult<PagedResult<CampaignActivity>> {
        self.campaign_activity(campaign_id, ActivityKind::Clicks, query).await
    }

    pub async fn campaign_unsubscribes(
        &self,
        campaign_id: &str,
        query: &PageQuery,
    ) -> ApiResult<PagedResult<CampaignActivity>> {
        self.campaign_activity(campaign_id, ActivityKind::Unsubscribes, query).await
    }

    pub async fn campaign_spam_complaints(
        &self,
        campaign_id: &str,
        query: &PageQuery,
    ) -> ApiResult<PagedResult<CampaignActivity>> {
        self.campaign_activity(campaign_id, ActivityKind::SpamComplaints, query).await
    }

    pub async fn campaign_bounces(
        &self,
        campaign_id: &str,
        query: &PageQuery,
    ) -> ApiResult<PagedResult<CampaignActivity>> {
        self.campaign_activity(campaign_id, ActivityKind::Bounces, query).await
    }
}
