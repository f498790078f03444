/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Request builders for every resource endpoint
pub mod endpoints;
/// HTTP transport and the shared request dispatcher
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
