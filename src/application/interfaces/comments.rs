/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the comment endpoints
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Gets the recent comments on a media object
    async fn media_comments(
        &self,
        media_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Creates a comment on a media object
    ///
    /// The provider rejects comments longer than 300 characters, with more than
    /// 4 hashtags, more than 1 URL, or written all in capitals. These rules are
    /// not checked locally; the provider error is returned as `AppError::Request`.
    async fn add_comment(
        &self,
        media_id: &str,
        text: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Removes a comment on the token owner's media or authored by the token owner
    async fn remove_comment(
        &self,
        media_id: &str,
        comment_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;
}
