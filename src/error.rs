/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 14/5/25
 ******************************************************************************/
use crate::constants::ACCESS_DENIED_CODE;
use reqwest::StatusCode;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Error object carried in the `error` field of a VK API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}

impl ApiError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_access_denied(&self) -> bool {
        self.code == ACCESS_DENIED_CODE
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "api error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug)]
pub enum AuthError {
    Network(reqwest::Error),
    Json(serde_json::Error),
    MissingVariable(&'static str),
    InvalidClientId(String),
    InvalidUserId(String),
    Rejected { error: String, description: String },
    Unexpected(StatusCode),
    Other(String),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Network(e) => write!(f, "network error: {e}"),
            AuthError::Json(e) => write!(f, "json error: {e}"),
            AuthError::MissingVariable(name) => write!(f, "missing variable: {name}"),
            AuthError::InvalidClientId(v) => write!(f, "client id is not an integer: {v}"),
            AuthError::InvalidUserId(v) => write!(f, "user id is not an integer: {v}"),
            AuthError::Rejected { error, description } => {
                write!(f, "authorization rejected: {error} ({description})")
            }
            AuthError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            AuthError::Other(msg) => write!(f, "other error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Network(e)
    }
}
impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::Json(e)
    }
}
impl From<AppError> for AuthError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Network(e) => AuthError::Network(e),
            AppError::Json(e) => AuthError::Json(e),
            AppError::Unexpected(s) => AuthError::Unexpected(s),
            AppError::Auth(e) => e,
            other => AuthError::Other(other.to_string()),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Network(reqwest::Error),
    Json(serde_json::Error),
    Unexpected(StatusCode),
    Api(ApiError),
    SerializationError(String),
    Auth(AuthError),
}

impl AppError {
    /// Returns the API error when the service rejected the call.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_access_denied(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_access_denied)
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            AppError::Api(e) => write!(f, "{e}"),
            AppError::SerializationError(s) => write!(f, "serialization error: {s}"),
            AppError::Auth(e) => write!(f, "auth error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

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
impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}
impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Network(e) => AppError::Network(e),
            AuthError::Json(e) => AppError::Json(e),
            AuthError::Unexpected(s) => AppError::Unexpected(s),
            other => AppError::Auth(other),
        }
    }
}
