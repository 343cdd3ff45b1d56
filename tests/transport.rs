//
//  createsend
//  tests/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Integration tests for the reqwest transport and the full request pipeline
//! against a local mock server.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

use createsend::api::transactional::{SmartEmailFilter, SmartEmailStatus};
use createsend::api::{
    Client, ErrorCode, HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError,
};

/// Sends every request to the mock server, keeping path and query.
///
/// The pipeline always produces `https://` URLs; the mock server speaks plain
/// HTTP on localhost.
struct LocalTransport {
    inner: ReqwestTransport,
    target: Url,
}

impl LocalTransport {
    fn new(server_url: &str) -> Self {
        Self {
            inner: ReqwestTransport::default(),
            target: Url::parse(server_url).unwrap(),
        }
    }
}

#[async_trait]
impl Transport for LocalTransport {
    async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut url = self.target.clone();
        url.set_path(request.url.path());
        url.set_query(request.url.query());
        request.url = url;
        self.inner.send(request).await
    }
}

fn request(method: Method, url: &str, body: Option<&str>) -> HttpRequest {
    let mut headers = HeaderMap::new();
    if body.is_some() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    HttpRequest {
        method,
        url: Url::parse(url).unwrap(),
        headers,
        body: body.map(|b| b.as_bytes().to_vec()),
    }
}

fn local_client(server_url: &str) -> Client {
    Client::builder()
        .base_url("https://api.example.com/api/v3.3/")
        .transport(LocalTransport::new(server_url))
        .api_key("key")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_reqwest_transport_passes_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/things.json")
        .match_header("content-type", "application/json")
        .match_body(r#"{"Name":"n"}"#)
        .with_status(201)
        .with_header("x-request-id", "abc")
        .with_body(r#""new-id""#)
        .create_async()
        .await;

    let transport = ReqwestTransport::default();
    let response = transport
        .send(request(
            Method::POST,
            &format!("{}/things.json", server.url()),
            Some(r#"{"Name":"n"}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 201);
    assert_eq!(response.body, br#""new-id""#);
    assert_eq!(response.headers["x-request-id"], "abc");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_reqwest_transport_error_status_is_not_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/clients.json")
        .with_status(500)
        .with_body(r#"{"Code":500,"Message":"boom"}"#)
        .create_async()
        .await;

    let response = ReqwestTransport::default()
        .send(request(Method::GET, &format!("{}/clients.json", server.url()), None))
        .await
        .unwrap();
    assert_eq!(response.status.as_u16(), 500);
}

#[tokio::test]
async fn test_reqwest_transport_connection_refused() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result = ReqwestTransport::default()
        .send(request(
            Method::GET,
            &format!("http://127.0.0.1:{}/clients.json", port),
            None,
        ))
        .await;
    assert!(result.is_err());
}

#[test]
fn test_reqwest_transport_blocking_caller() {
    let mut server = mockito::Server::new();
    server
        .mock("DELETE", "/clients/abc.json")
        .with_status(200)
        .create();

    let url = format!("{}/clients/abc.json", server.url());
    let response = tokio_test::block_on(async {
        ReqwestTransport::default()
            .send(request(Method::DELETE, &url, None))
            .await
    })
    .unwrap();
    assert!(response.status.is_success());
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_pipeline_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3.3/clients.json")
        .match_header("authorization", "Basic a2V5OmtleQ==")
        .match_header("user-agent", createsend::user_agent().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"ClientID":"id","Name":"name"}]"#)
        .create_async()
        .await;

    let clients = local_client(&server.url()).clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, "id");
    assert_eq!(clients[0].name, "name");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_pipeline_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v3.3/billingdetails.json")
        .with_status(401)
        .with_body(r#"{"Code":50,"Message":"Must supply a valid HTTP Basic Authorization header"}"#)
        .create_async()
        .await;

    let err = local_client(&server.url())
        .billing_details()
        .await
        .unwrap_err();
    assert_eq!(err.code(), 50);
    assert!(err.message().starts_with("Must supply"));
}

#[tokio::test]
async fn test_pipeline_error_body_without_code() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v3.3/clients.json")
        .with_status(401)
        .with_body(r#"{"Message":"Invalid API key"}"#)
        .create_async()
        .await;

    let err = local_client(&server.url()).clients().await.unwrap_err();
    assert_eq!(err.code(), 0);
    assert_eq!(err.message(), "Invalid API key");
}

#[tokio::test]
async fn test_pipeline_query_reaches_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3.3/transactional/smartEmail")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("status".into(), "draft".into()),
            mockito::Matcher::UrlEncoded("clientID".into(), "c1".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let emails = local_client(&server.url())
        .smart_emails(&SmartEmailFilter {
            status: SmartEmailStatus::Draft,
            client_id: Some("c1".to_string()),
        })
        .await
        .unwrap();
    assert!(emails.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_pipeline_retries_then_reports_unknown() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = Client::builder()
        .shared_transport(Arc::new(LocalTransport::new(&format!("http://127.0.0.1:{}", port))))
        .api_key("key")
        .retry_count(2)
        .build()
        .unwrap();

    let err = client.countries().await.unwrap_err();
    assert!(err.is(ErrorCode::Unknown));
    assert!(err.is_wrapped());
}
