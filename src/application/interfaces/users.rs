/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the user endpoints
///
/// Every method takes an optional access token that overrides the client default.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets information about the owner of the access token
    async fn self_profile(&self, access_token: Option<&str>) -> Result<Value, AppError>;

    /// Gets the most recent media published by the owner of the access token
    async fn self_media(&self, access_token: Option<&str>) -> Result<Value, AppError>;

    /// Gets the recent media liked by the owner of the access token
    async fn self_media_liked(&self, access_token: Option<&str>) -> Result<Value, AppError>;

    /// Gets information about a user
    async fn user(&self, user_id: &str, access_token: Option<&str>) -> Result<Value, AppError>;

    /// Gets the most recent media published by a user
    async fn user_media(
        &self,
        user_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Searches users by name
    ///
    /// # Arguments
    /// * `query` - Name to search for
    /// * `count` - Number of users to return; falls back to the configured
    ///   default and is omitted when neither is set
    /// * `access_token` - Overrides the client default token
    async fn search_users(
        &self,
        query: &str,
        count: Option<u32>,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;
}
