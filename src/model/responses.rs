/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of the `/oauth/access_token` endpoint
///
/// Only `access_token` is structurally required; the `user` object and any
/// other field the provider adds are kept untouched.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token authorizing API calls on behalf of the user
    pub access_token: String,
    /// Profile of the user who granted the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    /// Every other field of the response
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenResponse {
    /// Id of the user who granted the token, when the provider returned it
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref()?.get("id")?.as_str()
    }

    /// Username of the user who granted the token, when the provider returned it
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref()?.get("username")?.as_str()
    }
}

impl TryFrom<Value> for TokenResponse {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if value.get("access_token").and_then(Value::as_str).is_none() {
            return Err(AppError::MalformedResponse(format!(
                "token response without access_token: {value}"
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}
