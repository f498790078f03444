/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::Coordinates;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the location endpoints
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Gets information about a location
    async fn location(
        &self,
        location_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Gets recent media from a location
    async fn media_by_location(
        &self,
        location_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Searches locations around a geographic point
    async fn search_locations(
        &self,
        location: Coordinates,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;
}
