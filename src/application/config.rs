/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_API_PATH, DEFAULT_HOST, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_non_empty, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// OAuth client credentials registered with Instagram
pub struct Credentials {
    /// Client ID of the registered application
    pub client_id: String,
    /// Client secret of the registered application, never serialized
    #[serde(default, skip_serializing)]
    pub client_secret: String,
    /// Redirect URI registered for the application
    pub redirect_uri: String,
    /// Default access token used when a call does not pass one, never serialized
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Scheme and host of the API, e.g. `https://api.instagram.com`
    pub base_url: String,
    /// Versioned path prefix of the resource endpoints, e.g. `/v1`
    pub api_path: String,
    /// Timeout in seconds for every request
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Instagram API client
pub struct Config {
    /// OAuth credentials and default token
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Default `count` sent by user search when the caller gives none
    pub search_count: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HOST.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    ///
    /// Recognized variables: `INSTAGRAM_CLIENT_ID`, `INSTAGRAM_CLIENT_SECRET`,
    /// `INSTAGRAM_REDIRECT_URI`, `INSTAGRAM_ACCESS_TOKEN`, `INSTAGRAM_BASE_URL`,
    /// `INSTAGRAM_API_PATH`, `INSTAGRAM_TIMEOUT` and `INSTAGRAM_SEARCH_COUNT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("INSTAGRAM_CLIENT_ID", String::new());
        let client_secret = get_env_or_default("INSTAGRAM_CLIENT_SECRET", String::new());
        let redirect_uri = get_env_or_default("INSTAGRAM_REDIRECT_URI", String::new());

        if client_id.is_empty() {
            error!("INSTAGRAM_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret.is_empty() {
            error!("INSTAGRAM_CLIENT_SECRET not found in environment variables or .env file");
        }
        if redirect_uri.is_empty() {
            error!("INSTAGRAM_REDIRECT_URI not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                redirect_uri,
                access_token: get_env_non_empty("INSTAGRAM_ACCESS_TOKEN"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("INSTAGRAM_BASE_URL", DEFAULT_HOST.to_string()),
                api_path: get_env_or_default("INSTAGRAM_API_PATH", DEFAULT_API_PATH.to_string()),
                timeout: get_env_or_default("INSTAGRAM_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            search_count: get_env_or_none("INSTAGRAM_SEARCH_COUNT"),
        }
    }

    /// Builds a configuration from explicit credentials, without reading the environment
    pub fn with_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
                redirect_uri: redirect_uri.into(),
                access_token: None,
            },
            rest_api: RestApiConfig::default(),
            search_count: None,
        }
    }

    /// Builds a configuration holding only a default access token
    ///
    /// Enough for resource calls; the OAuth handshake needs full credentials.
    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        Self::with_credentials("", "", "").access_token(access_token)
    }

    /// Sets the default access token
    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.credentials.access_token = Some(access_token.into());
        self
    }

    /// Points the client at another host, e.g. a mock server
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Sets the default `count` used by user search
    #[must_use]
    pub fn search_count(mut self, count: u32) -> Self {
        self.search_count = Some(count);
        self
    }

    /// Base URL of the OAuth endpoints, e.g. `https://api.instagram.com/oauth`
    #[must_use]
    pub fn auth_url(&self) -> String {
        format!(
            "{}{}",
            self.rest_api.base_url.trim_end_matches('/'),
            crate::constants::AUTH_PATH
        )
    }

    /// Base URL of the resource endpoints, e.g. `https://api.instagram.com/v1`
    #[must_use]
    pub fn api_url(&self) -> String {
        format!(
            "{}{}",
            self.rest_api.base_url.trim_end_matches('/'),
            self.rest_api.api_path
        )
    }
}
