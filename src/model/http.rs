/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! HTTP transport and the shared request dispatcher
//!
//! Every call of the client ends in [`dispatch`]: the transport performs the
//! I/O and the dispatcher turns its answer into JSON or an [`AppError`].
//! Nothing here retries; a failure is returned to the caller as is.

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::EndpointRequest;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Raw answer of a transport: status code and undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// Creates a response from a status and a body
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Capability to send one HTTP request and read its response
///
/// Implementations must issue exactly one request per call. Query parameters
/// go in the URL, form parameters in an `application/x-www-form-urlencoded` body.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `request` to `url` and returns the raw response
    async fn send(
        &self,
        url: &str,
        request: &EndpointRequest,
    ) -> Result<TransportResponse, AppError>;
}

/// Production transport backed by a single pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default user agent and the configured timeout
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        url: &str,
        request: &EndpointRequest,
    ) -> Result<TransportResponse, AppError> {
        let mut builder = self.client.request(request.method.clone(), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

/// Sends `request` through `transport` and normalizes the answer
///
/// # Returns
/// * `Ok(Value)` - The parsed JSON body of a 2xx response, unchanged
/// * `Err(AppError::Request)` - A non-2xx response, with status and raw body
/// * `Err(AppError::MalformedResponse)` - A 2xx response that is not JSON
/// * `Err(AppError::Network)` - The transport could not complete the exchange
pub async fn dispatch(
    transport: &dyn HttpTransport,
    base_url: &str,
    request: &EndpointRequest,
) -> Result<Value, AppError> {
    let url = request.url(base_url);
    debug!("{} {}", request.method, url);

    let response = transport.send(&url, request).await?;
    let status = response.status;
    debug!("Response status: {}", status);

    if !status.is_success() {
        error!("Request failed with status {}: {}", status, response.body);
        return Err(AppError::Request {
            status,
            body: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| {
        error!("Response with status {} is not valid JSON: {}", status, e);
        AppError::MalformedResponse(format!("{e}: {}", response.body))
    })
}
