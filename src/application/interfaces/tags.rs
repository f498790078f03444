/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the tag endpoints
#[async_trait]
pub trait TagService: Send + Sync {
    /// Gets information about a tag
    async fn tag(&self, tag: &str, access_token: Option<&str>) -> Result<Value, AppError>;

    /// Gets recently tagged media
    async fn media_by_tag(&self, tag: &str, access_token: Option<&str>)
    -> Result<Value, AppError>;

    /// Searches tags by name
    async fn search_tags(&self, query: &str, access_token: Option<&str>)
    -> Result<Value, AppError>;
}
