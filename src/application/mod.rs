/// OAuth2 authorization-code flow
pub mod auth;
/// Client for the resource endpoints
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces grouping the resource endpoints
pub mod interfaces;
