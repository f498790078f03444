/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the like endpoints
#[async_trait]
pub trait LikeService: Send + Sync {
    /// Gets the users who liked a media object
    async fn media_likes(
        &self,
        media_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Likes a media object as the token owner
    async fn add_like(&self, media_id: &str, access_token: Option<&str>)
    -> Result<Value, AppError>;

    /// Removes the token owner's like from a media object
    async fn remove_like(
        &self,
        media_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;
}
