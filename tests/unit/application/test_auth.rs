use crate::common::{RecordingTransport, auth_client, test_config};
use instagram_client::prelude::*;
use mockito::{Matcher, Server};
use reqwest::{Method, Url};
use std::collections::HashMap;

fn query_of(url: &str) -> HashMap<String, String> {
    Url::parse(url)
        .unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn authorization_url_contains_required_parameters() {
    let (auth, transport) = auth_client();
    let url = auth
        .authorization_url(&[Scope::Basic, Scope::PublicContent])
        .unwrap();

    assert!(url.starts_with("https://api.instagram.com/oauth/authorize/?"));
    assert!(url.contains("scope=basic+public_content"));

    let query = query_of(&url);
    assert_eq!(query.len(), 4);
    assert_eq!(query["client_id"], "CLIENT_ID");
    assert_eq!(query["redirect_uri"], "https://example.com/callback");
    assert_eq!(query["response_type"], "code");
    assert_eq!(query["scope"], "basic public_content");

    assert_eq!(transport.count(), 0, "building the url must not do any I/O");
}

#[test]
fn authorization_url_passes_unknown_scopes_through() {
    let (auth, _) = auth_client();
    let url = auth
        .authorization_url(&["basic", "comments", "custom_scope"])
        .unwrap();
    assert_eq!(query_of(&url)["scope"], "basic comments custom_scope");
}

#[test]
fn authorization_url_with_no_scopes_keeps_other_parameters() {
    let (auth, _) = auth_client();
    let url = auth.authorization_url::<&str>(&[]).unwrap();
    let query = query_of(&url);
    assert_eq!(query["scope"], "");
    assert_eq!(query["response_type"], "code");
}

#[test]
fn authorization_url_rejects_invalid_host() {
    let config = test_config().base_url("not a url");
    let auth = AuthClient::with_transport(Arc::new(config), RecordingTransport::new());
    let err = auth.authorization_url(&[Scope::Basic]).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn exchange_code_issues_single_post_with_credentials() {
    let (auth, transport) = auth_client();
    transport.push_response(
        200,
        r#"{"access_token":"ACCESS","user":{"id":"1","username":"jack"}}"#,
    );

    let token = auth.exchange_code_for_token("abc123").await.unwrap();

    assert_eq!(token.access_token, "ACCESS");
    assert_eq!(token.username(), Some("jack"));
    assert_eq!(transport.count(), 1);

    let (url, request) = transport.last();
    assert_eq!(url, "https://api.instagram.com/oauth/access_token");
    assert_eq!(request.method, Method::POST);
    assert!(request.query.is_empty());
    assert_eq!(request.param("code"), Some("abc123"));
    assert_eq!(request.param("client_id"), Some("CLIENT_ID"));
    assert_eq!(request.param("client_secret"), Some("CLIENT_SECRET"));
    assert_eq!(request.param("redirect_uri"), Some("https://example.com/callback"));
    assert_eq!(request.param("grant_type"), Some("authorization_code"));
}

#[tokio::test]
async fn exchange_code_is_not_retried_on_failure() {
    let (auth, transport) = auth_client();
    transport.push_response(
        400,
        r#"{"error_type":"OAuthException","code":400,"error_message":"No matching code found."}"#,
    );

    let err = auth.exchange_code_for_token("used-code").await.unwrap_err();

    match err {
        AppError::Request { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("No matching code found."));
        }
        other => panic!("Unexpected error: {:?}", other),
    }
    assert_eq!(transport.count(), 1);
}

#[tokio::test]
async fn exchange_code_without_access_token_is_malformed() {
    let (auth, transport) = auth_client();
    transport.push_response(200, r#"{"user":{"id":"1"}}"#);

    let err = auth.exchange_code_for_token("abc123").await.unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[tokio::test]
async fn exchange_code_against_http_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/oauth/access_token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client_id".into(), "CLIENT_ID".into()),
            Matcher::UrlEncoded("client_secret".into(), "CLIENT_SECRET".into()),
            Matcher::UrlEncoded("redirect_uri".into(), "https://example.com/callback".into()),
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("code".into(), "abc123".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"ACCESS","user":{"id":"1","username":"jack"}}"#)
        .expect(1)
        .create_async()
        .await;

    let auth = AuthClient::new(test_config().base_url(server.url())).unwrap();
    let token = auth.exchange_code_for_token("abc123").await.unwrap();

    assert_eq!(token.access_token, "ACCESS");
    mock.assert_async().await;
}
