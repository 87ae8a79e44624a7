use crate::error::AuthError;
use async_trait::async_trait;
use std::fmt;

/// Identity on whose behalf every API call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserActor {
    pub user_id: i64,
    pub access_token: String,
}

impl UserActor {
    pub fn new(user_id: i64, access_token: impl Into<String>) -> Self {
        Self {
            user_id,
            access_token: access_token.into(),
        }
    }
}

impl fmt::Display for UserActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"user_id\":{},\"access_token\":\"[REDACTED]\"}}",
            self.user_id
        )
    }
}

/// Application credentials used once for the authorization code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCredentials {
    pub client_id: i64,
    pub client_secret: String,
    pub code: String,
}

impl AuthCredentials {
    /// Builds credentials from raw configuration values.
    ///
    /// Every value is required and the client id must be an integer. Values are
    /// trimmed; an empty value counts as missing.
    pub fn from_raw(
        client_id: Option<&str>,
        client_secret: Option<&str>,
        code: Option<&str>,
    ) -> Result<Self, AuthError> {
        let client_id = present(client_id).ok_or(AuthError::MissingVariable("clientId"))?;
        let client_id = client_id
            .parse::<i64>()
            .map_err(|_| AuthError::InvalidClientId(client_id.to_string()))?;
        let client_secret = present(client_secret).ok_or(AuthError::MissingVariable("secret"))?;
        let code = present(code).ok_or(AuthError::MissingVariable("code"))?;

        Ok(Self {
            client_id,
            client_secret: client_secret.to_string(),
            code: code.to_string(),
        })
    }
}

pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VkAuthenticator: Send + Sync {
    /// Exchanges an authorization code for an actor.
    async fn exchange_code(&self, credentials: &AuthCredentials) -> Result<UserActor, AuthError>;
}
