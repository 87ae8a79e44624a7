/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/5/25
******************************************************************************/

pub(crate) const DEFAULT_API_BASE_URL: &str = "https://api.vk.com/method";
pub(crate) const DEFAULT_OAUTH_BASE_URL: &str = "https://oauth.vk.com";
pub(crate) const DEFAULT_API_VERSION: &str = "5.131";
pub(crate) const DEFAULT_REST_TIMEOUT: u64 = 30;

/// Redirect target registered for the authorization code flow.
pub const REDIRECT_URI: &str = "https://oauth.vk.com/blank.html";

pub(crate) const ACCESS_TOKEN_PARAM: &str = "access_token";
pub(crate) const VERSION_PARAM: &str = "v";
pub(crate) const USER_AGENT: &str = "vk-rs/0.1";

/// VK error code returned when the actor is not allowed to perform the call.
pub const ACCESS_DENIED_CODE: i32 = 15;

/// Upper bound of posts fed to the bulk add-like scenario.
pub const BULK_POST_LIMIT: usize = 5;

pub(crate) const ENV_ACCESS_TOKEN: &str = "accessToken";
pub(crate) const ENV_USER_ID: &str = "userId";
pub(crate) const ENV_CLIENT_ID: &str = "clientId";
pub(crate) const ENV_SECRET: &str = "secret";
pub(crate) const ENV_CODE: &str = "code";
