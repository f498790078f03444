/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! OAuth2 authorization-code flow
//!
//! Two steps: send the user to [`AuthClient::authorization_url`], then trade
//! the `code` received on the redirect URI for a token with
//! [`AuthClient::exchange_code_for_token`].

use crate::application::config::Config;
use crate::constants::{AUTH_PATH, GRANT_TYPE_AUTHORIZATION_CODE};
use crate::error::AppError;
use crate::model::http::{HttpTransport, ReqwestTransport, dispatch};
use crate::model::requests::EndpointRequest;
use crate::model::responses::TokenResponse;
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the OAuth endpoints of the provider
#[derive(Clone)]
pub struct AuthClient {
    config: Arc<Config>,
    transport: Arc<dyn HttpTransport>,
}

impl AuthClient {
    /// Creates an auth client using the `reqwest` transport
    ///
    /// # Returns
    /// * `Ok(AuthClient)` - Ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(config), Arc::new(transport)))
    }

    /// Creates an auth client over any transport
    pub fn with_transport(config: Arc<Config>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the URL the user must visit to grant access
    ///
    /// Scopes are joined with spaces (encoded as `+`) and sent as given; the
    /// provider decides which names it accepts.
    ///
    /// # Arguments
    /// * `scopes` - Requested permissions, e.g. `&[Scope::Basic, Scope::Likes]`
    ///
    /// # Returns
    /// * `Ok(String)` - The authorization URL
    /// * `Err(AppError::InvalidInput)` - If the configured host is not a valid URL
    pub fn authorization_url<S: AsRef<str>>(&self, scopes: &[S]) -> Result<String, AppError> {
        let endpoint = format!("{}/authorize/", self.config.auth_url());
        let scope = scopes
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        let credentials = &self.config.credentials;

        let url = Url::parse_with_params(
            &endpoint,
            &[
                ("client_id", credentials.client_id.as_str()),
                ("redirect_uri", credentials.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", scope.as_str()),
            ],
        )
        .map_err(|e| {
            AppError::InvalidInput(format!("invalid authorization url {endpoint}: {e}"))
        })?;

        debug!("Authorization url: {}", url);
        Ok(url.into())
    }

    /// Exchanges an authorization code for an access token
    ///
    /// Issues exactly one form-encoded POST to `/oauth/access_token`. Codes are
    /// single-use, so a failed exchange is returned and never retried.
    ///
    /// # Arguments
    /// * `code` - The code received on the redirect URI
    ///
    /// # Returns
    /// * `Ok(TokenResponse)` - The token and the profile of the granting user
    /// * `Err(AppError)` - Transport failure, non-2xx answer or unexpected body
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<TokenResponse, AppError> {
        info!("Exchanging authorization code for an access token");
        let credentials = &self.config.credentials;

        let request = EndpointRequest::post(format!("{AUTH_PATH}/access_token"))
            .with_form("client_id", &credentials.client_id)
            .with_form("client_secret", &credentials.client_secret)
            .with_form("redirect_uri", &credentials.redirect_uri)
            .with_form("grant_type", GRANT_TYPE_AUTHORIZATION_CODE)
            .with_form("code", code);

        let value = dispatch(
            self.transport.as_ref(),
            self.config.rest_api.base_url.as_str(),
            &request,
        )
        .await?;
        let token = TokenResponse::try_from(value)?;

        info!(
            "✓ Access token obtained for user: {}",
            token.username().unwrap_or("unknown")
        );
        Ok(token)
    }
}
