/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/5/25
******************************************************************************/
use crate::config::Config;
use crate::constants::REDIRECT_URI;
use crate::error::AuthError;
use crate::session::interface::{AuthCredentials, UserActor, VkAuthenticator};
use crate::transport::http_client::VkHttpClient;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Successful answer of the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    pub user_id: i64,
}

/// Failure answer of the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: String,
}

/// Authorization code flow against the VK OAuth server.
pub struct VkAuth<T: VkHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: VkHttpClient> VkAuth<T> {
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    fn token_url(&self) -> String {
        format!(
            "{}/access_token",
            self.config.rest_api.oauth_url.trim_end_matches('/')
        )
    }
}

fn parse_token_response(status: StatusCode, body: &str) -> Result<UserActor, AuthError> {
    if let Ok(rejection) = serde_json::from_str::<TokenErrorResponse>(body) {
        debug!(
            "Authorization code exchange rejected: {} {}",
            rejection.error, rejection.error_description
        );
        return Err(AuthError::Rejected {
            error: rejection.error,
            description: rejection.error_description,
        });
    }

    if !status.is_success() {
        debug!("Unexpected status on token exchange: {}", status);
        return Err(AuthError::Unexpected(status));
    }

    let token: TokenResponse = serde_json::from_str(body)?;
    debug!(
        "Token issued for user {} (expires in {}s)",
        token.user_id, token.expires_in
    );
    Ok(UserActor::new(token.user_id, token.access_token))
}

#[async_trait]
impl<T: VkHttpClient + 'static> VkAuthenticator for VkAuth<T> {
    #[instrument(skip(self, credentials), fields(client_id = credentials.client_id))]
    async fn exchange_code(&self, credentials: &AuthCredentials) -> Result<UserActor, AuthError> {
        let query = [
            ("client_id", credentials.client_id.to_string()),
            ("client_secret", credentials.client_secret.clone()),
            ("redirect_uri", REDIRECT_URI.to_string()),
            ("code", credentials.code.clone()),
        ];

        let (status, body) = self.client.fetch(&self.token_url(), &query).await?;

        parse_token_response(status, &body)
    }
}
