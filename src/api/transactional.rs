//
//  createsend
//  api/transactional.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Transactional email API types and operations.
//!
//! Two flavours of one-to-one email:
//!
//! - **Smart emails** are designed in the web app and filled with per-message
//!   `Data` variables at send time.
//! - **Classic emails** carry their full HTML/text content in the request and
//!   are grouped for reporting.
//!
//! Both return one [`MessageReceipt`] per recipient. Sent messages can be
//! listed, inspected and resent.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, ApiResult};
use super::Client;
use crate::util::{api_date, escape_segment, with_query};

/// Publication state filter for smart email listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmartEmailStatus {
    #[default]
    All,
    Draft,
    Active,
}

impl SmartEmailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Draft => "draft",
            Self::Active => "active",
        }
    }
}

/// Filter for [`Client::smart_emails`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmartEmailFilter {
    pub status: SmartEmailStatus,
    /// Required when authenticating with an account-level credential.
    pub client_id: Option<String>,
}

/// A smart email as listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SmartEmailSummary {
    #[serde(rename = "ID")]
    pub id: String,

    pub name: String,

    #[serde(with = "api_date::option", default)]
    pub created_at: Option<NaiveDateTime>,

    #[serde(default)]
    pub status: String,
}

/// Content summary of a smart email.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct SmartEmailContent {
    pub html: String,
    pub text: String,
    pub empty_fields: Vec<String>,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub inline_css: bool,
}

/// A smart email with its content and sending properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SmartEmailDetails {
    #[serde(rename = "SmartEmailID")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(with = "api_date::option", default)]
    pub created_at: Option<NaiveDateTime>,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub properties: SmartEmailProperties,

    #[serde(default)]
    pub add_recipients_to_list: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct SmartEmailProperties {
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub content: SmartEmailContent,
    pub text_preview_url: String,
    pub html_preview_url: String,
}

/// An attachment sent with a transactional email. `content` is base64.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Attachment {
    #[serde(rename = "Type")]
    pub content_type: String,
    pub name: String,
    pub content: String,
}

/// A message built from a smart email template.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SmartEmailMessage {
    /// Recipients, as `Name <address>` or bare addresses.
    pub to: Vec<String>,

    #[serde(rename = "CC", skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,

    #[serde(rename = "BCC", skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    /// Values for the template's variables.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, serde_json::Value>,

    pub add_recipients_to_list: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_to_track: Option<ConsentToTrack>,
}

/// Whether recipients agreed to open and click tracking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsentToTrack {
    Yes,
    No,
    Unchanged,
}

/// A message with all of its content supplied in the request.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ClassicEmailMessage {
    pub subject: String,
    pub from: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    pub to: Vec<String>,

    #[serde(rename = "CC", skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,

    #[serde(rename = "BCC", skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    pub track_opens: bool,
    pub track_clicks: bool,

    #[serde(rename = "InlineCSS")]
    pub inline_css: bool,

    /// Reporting group the message is counted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(rename = "AddRecipientsToListID", skip_serializing_if = "Option::is_none")]
    pub add_recipients_to_list_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_to_track: Option<ConsentToTrack>,
}

/// Acceptance record for one recipient of a sent message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MessageReceipt {
    #[serde(rename = "MessageID")]
    pub message_id: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub recipient: String,
}

/// A classic email reporting group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ClassicEmailGroup {
    pub group: String,

    #[serde(with = "api_date::option", default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Filter for [`Client::transactional_statistics`]. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsFilter {
    pub smart_email_id: Option<String>,
    pub group: Option<String>,
    /// `YYYY-MM-DD`
    pub from: Option<String>,
    /// `YYYY-MM-DD`
    pub to: Option<String>,
    pub time_zone: Option<String>,
    pub client_id: Option<String>,
}

impl StatisticsFilter {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("smartEmailID", &self.smart_email_id),
            ("group", &self.group),
            ("from", &self.from),
            ("to", &self.to),
            ("timezone", &self.time_zone),
            ("clientID", &self.client_id),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
        .collect()
    }
}

/// Aggregate delivery statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransactionalStatistics {
    pub sent: u64,
    pub bounces: u64,
    pub delivered: u64,
    pub opened: u64,
    pub clicked: u64,
    pub query: serde_json::Value,
}

/// Filter for [`Client::message_timeline`]. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineFilter {
    pub status: Option<String>,
    pub count: Option<u32>,
    pub smart_email_id: Option<String>,
    pub group: Option<String>,
    pub sent_before_id: Option<String>,
    pub sent_after_id: Option<String>,
    pub client_id: Option<String>,
}

impl TimelineFilter {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let count = self.count.map(|c| c.to_string());
        [
            ("status", &self.status),
            ("count", &count),
            ("smartEmailID", &self.smart_email_id),
            ("group", &self.group),
            ("sentBeforeID", &self.sent_before_id),
            ("sentAfterID", &self.sent_after_id),
            ("clientID", &self.client_id),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
        .collect()
    }
}

/// A sent message as shown in the timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MessageSummary {
    #[serde(rename = "MessageID")]
    pub message_id: String,

    #[serde(default)]
    pub status: String,

    #[serde(with = "api_date::option", default)]
    pub sent_at: Option<NaiveDateTime>,

    #[serde(default)]
    pub recipient: String,

    #[serde(default)]
    pub from: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub total_opens: u64,

    #[serde(default)]
    pub total_clicks: u64,

    #[serde(default)]
    pub can_be_resent: bool,

    #[serde(rename = "SmartEmailID", default)]
    pub smart_email_id: Option<String>,

    #[serde(default)]
    pub group: Option<String>,
}

/// Full details of one sent message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MessageDetails {
    #[serde(flatten)]
    pub summary: MessageSummary,

    /// The request body the message was sent with.
    #[serde(default)]
    pub message: serde_json::Value,

    /// Present only when statistics were requested.
    #[serde(default, deserialize_with = "null_as_default")]
    pub opens: Vec<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub clicks: Vec<serde_json::Value>,
}

fn client_scope(client_id: Option<&str>) -> Vec<(&'static str, String)> {
    client_id
        .map(|id| vec![("clientID", id.to_string())])
        .unwrap_or_default()
}

impl Client {
    pub async fn smart_emails(
        &self,
        filter: &SmartEmailFilter,
    ) -> ApiResult<Vec<SmartEmailSummary>> {
        let mut pairs = vec![("status", filter.status.as_str().to_string())];
        pairs.extend(client_scope(filter.client_id.as_deref()));
        self.fetch(&with_query("transactional/smartEmail", &pairs)).await
    }

    pub async fn smart_email(&self, smart_email_id: &str) -> ApiResult<SmartEmailDetails> {
        let path = format!("transactional/smartEmail/{}", escape_segment(smart_email_id)?);
        self.fetch(&path).await
    }

    /// Sends a smart email; one receipt comes back per recipient.
    pub async fn send_smart_email(
        &self,
        smart_email_id: &str,
        message: &SmartEmailMessage,
    ) -> ApiResult<Vec<MessageReceipt>> {
        let path = format!("transactional/smartEmail/{}/send", escape_segment(smart_email_id)?);
        self.create(&path, Some(message)).await
    }

    /// Sends a classic email; `client_id` is required with account credentials.
    pub async fn send_classic_email(
        &self,
        client_id: Option<&str>,
        message: &ClassicEmailMessage,
    ) -> ApiResult<Vec<MessageReceipt>> {
        let path = with_query("transactional/classicEmail/send", &client_scope(client_id));
        self.create(&path, Some(message)).await
    }

    pub async fn classic_email_groups(
        &self,
        client_id: Option<&str>,
    ) -> ApiResult<Vec<ClassicEmailGroup>> {
        let path = with_query("transactional/classicEmail/groups", &client_scope(client_id));
        self.fetch(&path).await
    }

    pub async fn transactional_statistics(
        &self,
        filter: &StatisticsFilter,
    ) -> ApiResult<TransactionalStatistics> {
        self.fetch(&with_query("transactional/statistics", &filter.to_pairs())).await
    }

    pub async fn message_timeline(
        &self,
        filter: &TimelineFilter,
    ) -> ApiResult<Vec<MessageSummary>> {
        self.fetch(&with_query("transactional/messages", &filter.to_pairs())).await
    }

    pub async fn message_details(
        &self,
        message_id: &str,
        statistics: bool,
    ) -> ApiResult<MessageDetails> {
        let path = with_query(
            &format!("transactional/messages/{}", escape_segment(message_id)?),
            &[("statistics", if statistics { "true" } else { "false" })],
        );
        self.fetch(&path).await
    }

    pub async fn resend_message(&self, message_id: &str) -> ApiResult<MessageReceipt> {
        let path = format!("transactional/messages/{}/resend", escape_segment(message_id)?);
        self.create::<_, ()>(&path, None).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;
    use crate::api::client::tests::{client_with, StubTransport};

    #[tokio::test]
    async fn test_smart_emails_query() {
        let stub = StubTransport::reply(
            200,
            r#"[{"ID":"bb4a6ebb-663d-42a0-bdbe-60512cf30a01","Name":"Welcome","CreatedAt":"2015-08-12T08:16:18","Status":"Active"}]"#,
        );
        let client = client_with(stub.clone());

        let emails = client
            .smart_emails(&SmartEmailFilter {
                status: SmartEmailStatus::Active,
                client_id: Some("c1".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(emails[0].name, "Welcome");
        assert!(emails[0].created_at.is_some());
        assert_eq!(
            stub.last_request().url.query(),
            Some("status=active&clientID=c1")
        );
    }

    #[tokio::test]
    async fn test_send_smart_email() {
        let stub = StubTransport::reply(
            202,
            r#"[{"Status":"Accepted","MessageID":"m1","Recipient":"joe@example.com"}]"#,
        );
        let client = client_with(stub.clone());

        let mut data = BTreeMap::new();
        data.insert("firstname".to_string(), serde_json::json!("Joe"));
        let receipts = client
            .send_smart_email(
                "se1",
                &SmartEmailMessage {
                    to: vec!["Joe <joe@example.com>".to_string()],
                    data,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(receipts[0].message_id, "m1");
        assert_eq!(receipts[0].status, "Accepted");

        let request = stub.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/transactional/smartEmail/se1/send");
        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "To": ["Joe <joe@example.com>"],
                "Data": {"firstname": "Joe"},
                "AddRecipientsToList": false
            })
        );
    }

    #[tokio::test]
    async fn test_send_classic_email_scoped_to_client() {
        let stub = StubTransport::reply(
            202,
            r#"[{"Status":"Accepted","MessageID":"m2","Recipient":"a@example.com"}]"#,
        );
        let client = client_with(stub.clone());

        client
            .send_classic_email(
                Some("c1"),
                &ClassicEmailMessage {
                    subject: "Hi".to_string(),
                    from: "me@example.com".to_string(),
                    to: vec!["a@example.com".to_string()],
                    html: Some("<p>Hi</p>".to_string()),
                    track_opens: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let request = stub.last_request();
        assert_eq!(request.url.path(), "/transactional/classicEmail/send");
        assert_eq!(request.url.query(), Some("clientID=c1"));
        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(body["InlineCSS"], false);
        assert_eq!(body["TrackOpens"], true);
        assert!(body.get("Text").is_none());
    }

    #[tokio::test]
    async fn test_message_timeline_filter() {
        let stub = StubTransport::reply(200, "[]");
        let client = client_with(stub.clone());

        let messages = client
            .message_timeline(&TimelineFilter {
                status: Some("delivered".to_string()),
                count: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(messages.is_empty());
        assert_eq!(
            stub.last_request().url.query(),
            Some("status=delivered&count=10")
        );
    }

    #[tokio::test]
    async fn test_message_details_flattens_summary() {
        let stub = StubTransport::reply(
            200,
            r#"{"MessageID":"m1","Status":"Delivered","SentAt":"2015-08-12T08:16:18","Recipient":"a@example.com",
                "CanBeResent":true,"Message":{"Subject":"Hi"},"Opens":null}"#,
        );
        let client = client_with(stub.clone());

        let details = client.message_details("m1", true).await.unwrap();
        assert_eq!(details.summary.message_id, "m1");
        assert!(details.summary.can_be_resent);
        assert!(details.opens.is_empty());
        assert_eq!(details.message["Subject"], "Hi");
        assert_eq!(stub.last_request().url.query(), Some("statistics=true"));
    }

    #[tokio::test]
    async fn test_resend_message() {
        let stub = StubTransport::reply(
            202,
            r#"{"Status":"Accepted","MessageID":"m3","Recipient":"a@example.com"}"#,
        );
        let client = client_with(stub.clone());

        let receipt = client.resend_message("m1").await.unwrap();
        assert_eq!(receipt.message_id, "m3");
        assert_eq!(stub.last_request().url.path(), "/transactional/messages/m1/resend");
    }

    #[tokio::test]
    async fn test_message_id_dot_segment_rejected() {
        let stub = StubTransport::reply(200, "{}");
        let client = client_with(stub.clone());

        let err = client.resend_message("..").await.unwrap_err();
        assert!(err.is(crate::api::ErrorCode::InvalidUrl));
        assert_eq!(stub.request_count(), 0);
    }
}
