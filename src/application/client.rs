/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the Instagram resource endpoints
//!
//! # Example
//! ```ignore
//! use instagram_client::prelude::*;
//!
//! let client = ApiClient::new(Config::with_access_token("TOKEN"))?;
//! let me = client.self_profile(None).await?;
//! println!("{}", me["data"]["username"]);
//! ```

use crate::application::config::Config;
use crate::application::interfaces::{
    CommentService, LikeService, LocationService, MediaService, RelationshipService, TagService,
    UserService,
};
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::http::{HttpTransport, ReqwestTransport, dispatch};
use crate::model::requests::{Coordinates, EndpointRequest, RelationshipAction};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client exposing one method per resource endpoint
///
/// Holds only immutable state, so a single instance can be shared across tasks.
/// Every call is one HTTP round trip; nothing is cached or retried.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<Config>,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    /// Creates a client using the `reqwest` transport
    ///
    /// # Returns
    /// * `Ok(ApiClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(config), Arc::new(transport)))
    }

    /// Creates a client over any transport
    pub fn with_transport(config: Arc<Config>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Picks the token for a call: the explicit one, else the client default
    ///
    /// Blank tokens count as absent on both sides.
    ///
    /// # Returns
    /// * `Err(AppError::MissingToken)` - If neither is available
    pub fn resolve_token<'a>(&'a self, access_token: Option<&'a str>) -> Result<&'a str, AppError> {
        let present = |token: &&str| !token.trim().is_empty();
        access_token
            .filter(present)
            .or(self.config.credentials.access_token.as_deref().filter(present))
            .ok_or(AppError::MissingToken)
    }

    /// Attaches the resolved token to `request` without sending it
    pub fn prepare(
        &self,
        request: EndpointRequest,
        access_token: Option<&str>,
    ) -> Result<EndpointRequest, AppError> {
        let token = self.resolve_token(access_token)?;
        Ok(request.with_access_token(token))
    }

    /// Resolves the token, then dispatches `request` against the API root
    ///
    /// Fails with `MissingToken` before any I/O when no token is available.
    pub async fn call(
        &self,
        request: EndpointRequest,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        let request = self.prepare(request, access_token)?;
        let result = dispatch(self.transport.as_ref(), &self.config.api_url(), &request).await?;
        debug!("{} {} completed", request.method, request.path);
        Ok(result)
    }
}

#[async_trait]
impl UserService for ApiClient {
    async fn self_profile(&self, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting profile of the token owner");
        self.call(endpoints::self_profile(), access_token).await
    }

    async fn self_media(&self, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting recent media of the token owner");
        self.call(endpoints::self_media(), access_token).await
    }

    async fn self_media_liked(&self, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting media liked by the token owner");
        self.call(endpoints::self_media_liked(), access_token).await
    }

    async fn user(&self, user_id: &str, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting user: {}", user_id);
        self.call(endpoints::user(user_id), access_token).await
    }

    async fn user_media(
        &self,
        user_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Getting recent media of user: {}", user_id);
        self.call(endpoints::user_media(user_id), access_token).await
    }

    async fn search_users(
        &self,
        query: &str,
        count: Option<u32>,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Searching users: {}", query);
        let count = count.or(self.config.search_count);
        self.call(endpoints::search_users(query, count), access_token)
            .await
    }
}

#[async_trait]
impl RelationshipService for ApiClient {
    async fn user_relationship(
        &self,
        user_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Getting relationship with user: {}", user_id);
        self.call(endpoints::user_relationship(user_id), access_token)
            .await
    }

    async fn update_relationship(
        &self,
        user_id: &str,
        action: RelationshipAction,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Updating relationship with user {}: {}", user_id, action);
        self.call(endpoints::update_relationship(user_id, action), access_token)
            .await
    }

    async fn self_follows(&self, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting users followed by the token owner");
        self.call(endpoints::self_follows(), access_token).await
    }

    async fn self_followers(&self, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting followers of the token owner");
        self.call(endpoints::self_followers(), access_token).await
    }

    async fn self_pending(&self, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting pending follow requests");
        self.call(endpoints::self_pending(), access_token).await
    }
}

#[async_trait]
impl MediaService for ApiClient {
    async fn media(&self, media_id: &str, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting media: {}", media_id);
        self.call(endpoints::media(media_id), access_token).await
    }

    async fn search_media(
        &self,
        location: Coordinates,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Searching media around {}, {}", location.lat, location.lng);
        self.call(endpoints::search_media(location), access_token)
            .await
    }
}

#[async_trait]
impl CommentService for ApiClient {
    async fn media_comments(
        &self,
        media_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Getting comments of media: {}", media_id);
        self.call(endpoints::media_comments(media_id), access_token)
            .await
    }

    async fn add_comment(
        &self,
        media_id: &str,
        text: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Adding comment to media: {}", media_id);
        self.call(endpoints::add_comment(media_id, text), access_token)
            .await
    }

    async fn remove_comment(
        &self,
        media_id: &str,
        comment_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Removing comment {} from media: {}", comment_id, media_id);
        self.call(endpoints::remove_comment(media_id, comment_id), access_token)
            .await
    }
}

#[async_trait]
impl LikeService for ApiClient {
    async fn media_likes(
        &self,
        media_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Getting likes of media: {}", media_id);
        self.call(endpoints::media_likes(media_id), access_token)
            .await
    }

    async fn add_like(&self, media_id: &str, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Liking media: {}", media_id);
        self.call(endpoints::add_like(media_id), access_token).await
    }

    async fn remove_like(
        &self,
        media_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Removing like from media: {}", media_id);
        self.call(endpoints::remove_like(media_id), access_token)
            .await
    }
}

#[async_trait]
impl TagService for ApiClient {
    async fn tag(&self, tag: &str, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting tag: {}", tag);
        self.call(endpoints::tag(tag), access_token).await
    }

    async fn media_by_tag(&self, tag: &str, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Getting recent media tagged: {}", tag);
        self.call(endpoints::media_by_tag(tag), access_token).await
    }

    async fn search_tags(&self, query: &str, access_token: Option<&str>) -> Result<Value, AppError> {
        info!("Searching tags: {}", query);
        self.call(endpoints::search_tags(query), access_token).await
    }
}

#[async_trait]
impl LocationService for ApiClient {
    async fn location(
        &self,
        location_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Getting location: {}", location_id);
        self.call(endpoints::location(location_id), access_token)
            .await
    }

    async fn media_by_location(
        &self,
        location_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Getting recent media at location: {}", location_id);
        self.call(endpoints::media_by_location(location_id), access_token)
            .await
    }

    async fn search_locations(
        &self,
        location: Coordinates,
        access_token: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Searching locations around {}, {}", location.lat, location.lng);
        self.call(endpoints::search_locations(location), access_token)
            .await
    }
}
