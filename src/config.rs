use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_VERSION, DEFAULT_OAUTH_BASE_URL, DEFAULT_REST_TIMEOUT,
    ENV_ACCESS_TOKEN, ENV_CLIENT_ID, ENV_CODE, ENV_SECRET, ENV_USER_ID,
};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Raw credential values as found in the environment.
///
/// Nothing is parsed here; the resolver decides which of them are usable.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Credentials {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
    pub client_id: Option<String>,
    pub secret: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub rest_api: RestApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestApiConfig {
    pub base_url: String,
    pub oauth_url: String,
    pub api_version: String,
    pub timeout: u64,
}

fn redacted(value: &Option<String>) -> String {
    value
        .as_ref()
        .map_or("null".to_string(), |_| "\"[REDACTED]\"".to_string())
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"access_token\":{},\"user_id\":{},\"client_id\":{},\"secret\":{},\"code\":{}}}",
            redacted(&self.access_token),
            serde_json::to_string(&self.user_id).map_err(|_| fmt::Error)?,
            serde_json::to_string(&self.client_id).map_err(|_| fmt::Error)?,
            redacted(&self.secret),
            redacted(&self.code),
        )
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"credentials\":{},\"rest_api\":{}}}",
            self.credentials, self.rest_api
        )
    }
}

impl fmt::Display for RestApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"base_url\":{},\"oauth_url\":{},\"api_version\":{},\"timeout\":{}}}",
            serde_json::to_string(&self.base_url).map_err(|_| fmt::Error)?,
            serde_json::to_string(&self.oauth_url).map_err(|_| fmt::Error)?,
            serde_json::to_string(&self.api_version).map_err(|_| fmt::Error)?,
            self.timeout
        )
    }
}

pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads a variable verbatim, `None` when it is not set or not valid unicode.
pub fn get_env_optional(env_var: &str) -> Option<String> {
    env::var(env_var).ok()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            credentials: Credentials {
                access_token: get_env_optional(ENV_ACCESS_TOKEN),
                user_id: get_env_optional(ENV_USER_ID),
                client_id: get_env_optional(ENV_CLIENT_ID),
                secret: get_env_optional(ENV_SECRET),
                code: get_env_optional(ENV_CODE),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "VK_API_BASE_URL",
                    String::from(DEFAULT_API_BASE_URL),
                ),
                oauth_url: get_env_or_default(
                    "VK_OAUTH_BASE_URL",
                    String::from(DEFAULT_OAUTH_BASE_URL),
                ),
                api_version: get_env_or_default(
                    "VK_API_VERSION",
                    String::from(DEFAULT_API_VERSION),
                ),
                timeout: get_env_or_default("VK_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
        }
    }
}
