/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Instagram Client
//!
//! Async client for the Instagram HTTP API: the OAuth2 authorization-code
//! handshake plus the user, relationship, media, comment, like, tag and
//! location endpoints.
//!
//! ## Authorization
//!
//! ```rust,no_run
//! use instagram_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let auth = AuthClient::new(Config::new())?;
//! let url = auth.authorization_url(&[Scope::Basic, Scope::PublicContent])?;
//! println!("Open {url} and paste the code");
//!
//! let token = auth.exchange_code_for_token("CODE").await?;
//! let client = ApiClient::new(Config::new().access_token(token.access_token))?;
//! let me = client.self_profile(None).await?;
//! println!("{}", me["data"]["username"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every operation returns `Result<_, AppError>`. Non-2xx answers become
//! `AppError::Request` with the status and the raw body, calls without a
//! token fail with `AppError::MissingToken` before touching the network, and
//! 2xx answers that are not JSON become `AppError::MalformedResponse`.
//!
//! ## Configuration
//!
//! `Config::new()` reads `INSTAGRAM_CLIENT_ID`, `INSTAGRAM_CLIENT_SECRET`,
//! `INSTAGRAM_REDIRECT_URI`, `INSTAGRAM_ACCESS_TOKEN`, `INSTAGRAM_BASE_URL`,
//! `INSTAGRAM_API_PATH`, `INSTAGRAM_TIMEOUT` and `INSTAGRAM_SEARCH_COUNT`
//! from the environment or a `.env` file. Logging goes through `tracing`;
//! call `setup_logger()` and set `LOGLEVEL` to see it.

/// Auth and resource clients, configuration and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error type of the library
pub mod error;
/// Request and response models, endpoint builders and the HTTP dispatcher
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Configuration and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
