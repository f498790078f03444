/// Host serving both the OAuth endpoints and the REST API
pub const DEFAULT_HOST: &str = "https://api.instagram.com";
/// Path prefix of the OAuth endpoints
pub const AUTH_PATH: &str = "/oauth";
/// Path prefix of the versioned REST API
pub const DEFAULT_API_PATH: &str = "/v1";
/// Default timeout in seconds applied to every HTTP request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "instagram-client/0.1.0";
/// Query/form parameter carrying the access token on resource calls
pub const ACCESS_TOKEN_PARAM: &str = "access_token";
/// Grant type sent when exchanging an authorization code
pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";
