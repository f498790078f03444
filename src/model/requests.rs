/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::ACCESS_TOKEN_PARAM;
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single API call, built fresh for every request and discarded after dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    /// HTTP verb
    pub method: Method,
    /// Path relative to the base URL, e.g. `/v1/media/123/likes`
    pub path: String,
    /// Query string parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Form-encoded body parameters, in insertion order
    pub form: Vec<(String, String)>,
}

impl EndpointRequest {
    /// Creates a request with no parameters
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            form: Vec::new(),
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a query string parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Adds a form body parameter
    #[must_use]
    pub fn with_form(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.form.push((key.into(), value.to_string()));
        self
    }

    /// Adds a parameter where the verb expects it: the form body for POST,
    /// the query string otherwise
    #[must_use]
    pub fn with_param(self, key: impl Into<String>, value: impl ToString) -> Self {
        if self.method == Method::POST {
            self.with_form(key, value)
        } else {
            self.with_query(key, value)
        }
    }

    /// Attaches the access token as an `access_token` parameter
    #[must_use]
    pub fn with_access_token(self, token: &str) -> Self {
        self.with_param(ACCESS_TOKEN_PARAM, token)
    }

    /// Looks a parameter up in the query string, then in the form body
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .chain(self.form.iter())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Access token carried by the request, if any
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.param(ACCESS_TOKEN_PARAM)
    }

    /// Joins the path onto `base_url`
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        if self.path.contains("://") {
            self.path.clone()
        } else {
            format!("{}{}", base_url.trim_end_matches('/'), self.path)
        }
    }
}

/// OAuth permission scope
///
/// Any string can be requested; these are the values the provider documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Read a user's profile info and media
    Basic,
    /// Read any public profile info and media on a user's behalf
    PublicContent,
    /// Read the list of followers and followed-by users
    FollowerList,
    /// Post and delete comments on a user's behalf
    Comments,
    /// Follow and unfollow accounts on a user's behalf
    Relationships,
    /// Like and unlike media on a user's behalf
    Likes,
}

impl Scope {
    /// Wire name of the scope
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Basic => "basic",
            Scope::PublicContent => "public_content",
            Scope::FollowerList => "follower_list",
            Scope::Comments => "comments",
            Scope::Relationships => "relationships",
            Scope::Likes => "likes",
        }
    }
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Scope::Basic),
            "public_content" => Ok(Scope::PublicContent),
            "follower_list" => Ok(Scope::FollowerList),
            "comments" => Ok(Scope::Comments),
            "relationships" => Ok(Scope::Relationships),
            "likes" => Ok(Scope::Likes),
            other => Err(AppError::InvalidInput(format!("unknown scope: {other}"))),
        }
    }
}

/// Action accepted by the relationship endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipAction {
    /// Follow the target user
    Follow,
    /// Stop following the target user
    Unfollow,
    /// Approve a pending follow request
    Approve,
    /// Ignore a pending follow request
    Ignore,
}

impl RelationshipAction {
    /// Wire name of the action
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipAction::Follow => "follow",
            RelationshipAction::Unfollow => "unfollow",
            RelationshipAction::Approve => "approve",
            RelationshipAction::Ignore => "ignore",
        }
    }
}

impl fmt::Display for RelationshipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "follow" => Ok(RelationshipAction::Follow),
            "unfollow" => Ok(RelationshipAction::Unfollow),
            "approve" => Ok(RelationshipAction::Approve),
            "ignore" => Ok(RelationshipAction::Ignore),
            other => Err(AppError::InvalidInput(format!(
                "invalid relationship action: {other}, expected follow, unfollow, approve or ignore"
            ))),
        }
    }
}

/// Geographic coordinate pair used by media and location search
#[derive(DebugPretty, DisplaySimple, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}
