/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::RelationshipAction;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the relationship endpoints
#[async_trait]
pub trait RelationshipService: Send + Sync {
    /// Gets the relationship between the token owner and another user
    async fn user_relationship(
        &self,
        user_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Modifies the relationship between the token owner and another user
    ///
    /// One POST per call; repeating it repeats the side effect on the provider.
    async fn update_relationship(
        &self,
        user_id: &str,
        action: RelationshipAction,
        access_token: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Gets the list of users the token owner follows
    async fn self_follows(&self, access_token: Option<&str>) -> Result<Value, AppError>;

    /// Gets the list of users following the token owner
    async fn self_followers(&self, access_token: Option<&str>) -> Result<Value, AppError>;

    /// Lists users who have requested permission to follow the token owner
    async fn self_pending(&self, access_token: Option<&str>) -> Result<Value, AppError>;
}
