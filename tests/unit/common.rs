// Shared helpers for unit tests

use async_trait::async_trait;
use instagram_client::prelude::*;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that records every request and answers from a queue
///
/// When the queue is empty it answers `200 {}`.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<(String, EndpointRequest)>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_response(status: u16, body: &str) -> Arc<Self> {
        let transport = Self::default();
        transport.push_response(status, body);
        Arc::new(transport)
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(TransportResponse::new(
            StatusCode::from_u16(status).unwrap(),
            body,
        ));
    }

    pub fn requests(&self) -> Vec<(String, EndpointRequest)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> (String, EndpointRequest) {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(
        &self,
        url: &str,
        request: &EndpointRequest,
    ) -> Result<TransportResponse, AppError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), request.clone()));
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| TransportResponse::new(StatusCode::OK, "{}"));
        Ok(response)
    }
}

pub fn test_config() -> Config {
    Config::with_credentials("CLIENT_ID", "CLIENT_SECRET", "https://example.com/callback")
}

pub fn client_with_token(token: Option<&str>) -> (ApiClient, Arc<RecordingTransport>) {
    let mut config = test_config();
    config.credentials.access_token = token.map(String::from);
    let transport = RecordingTransport::new();
    let client = ApiClient::with_transport(Arc::new(config), transport.clone());
    (client, transport)
}

pub fn auth_client() -> (AuthClient, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new();
    let client = AuthClient::with_transport(Arc::new(test_config()), transport.clone());
    (client, transport)
}
