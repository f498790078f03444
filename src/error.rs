/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error type shared by every operation of the client.

use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Network, DNS, TLS or timeout failure raised by the HTTP transport
    Network(reqwest::Error),
    /// The provider answered with a non-2xx status
    Request {
        /// HTTP status returned by the provider
        status: StatusCode,
        /// Raw response body, kept for diagnostics
        body: String,
    },
    /// No access token was passed and the client has no default one
    MissingToken,
    /// A 2xx response whose body could not be understood
    MalformedResponse(String),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
    /// Invalid argument or configuration value
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status carried by a `Request` error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Request { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Request { status, body } => {
                write!(f, "request failed with status {status}: {body}")
            }
            AppError::MissingToken => write!(f, "missing access token"),
            AppError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
