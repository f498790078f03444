/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Instagram Client Prelude
//!
//! ```rust
//! use instagram_client::prelude::*;
//!
//! let config = Config::with_credentials("id", "secret", "https://example.com/callback");
//! let auth = AuthClient::new(config).unwrap();
//! let url = auth.authorization_url(&[Scope::Basic]).unwrap();
//! assert!(url.contains("response_type=code"));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Instagram API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENTS
// ============================================================================

/// OAuth client
pub use crate::application::auth::AuthClient;

/// Resource endpoint client
pub use crate::application::client::ApiClient;

/// Service traits implemented by `ApiClient`
pub use crate::application::interfaces::{
    CommentService, LikeService, LocationService, MediaService, RelationshipService, TagService,
    UserService,
};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

/// HTTP transport trait, its reqwest implementation and the dispatcher
pub use crate::model::http::{HttpTransport, ReqwestTransport, TransportResponse, dispatch};

/// Request models
pub use crate::model::requests::{Coordinates, EndpointRequest, RelationshipAction, Scope};

/// Response models
pub use crate::model::responses::TokenResponse;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
