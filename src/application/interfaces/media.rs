/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::Coordinates;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the media endpoints
#[async_trait]
pub trait MediaService: Send + Sync {
    /// Gets information about a media object
    ///
    /// The response carries `type` (image or video) and `user_has_liked`.
    async fn media(&self, media_id: &str, access_token: Option<&str>) -> Result<Value, AppError>;

    /// Searches recent media around a geographic point
    async fn search_media(
        &self,
        location: Coordinates,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;
}
