use crate::config::Config;
use crate::constants::{ACCESS_TOKEN_PARAM, USER_AGENT, VERSION_PARAM};
use crate::error::{ApiError, AppError};
use crate::session::interface::UserActor;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Envelope wrapping every API method answer.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    response: Option<T>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error_code: i32,
    error_msg: String,
}

#[async_trait]
pub trait VkHttpClient: Send + Sync {
    /// Invokes an API method on behalf of `actor` and unwraps its `response` field.
    async fn call<T>(
        &self,
        method: &str,
        actor: &UserActor,
        params: &[(&str, String)],
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned + Debug + Send + 'static;

    /// Plain GET returning the status and raw body, used by the OAuth endpoints.
    async fn fetch(&self, url: &str, query: &[(&str, String)])
        -> Result<(StatusCode, String), AppError>;
}

/// reqwest backed [`VkHttpClient`].
#[derive(Debug)]
pub struct VkHttpClientImpl {
    config: Arc<Config>,
    client: Client,
}

impl VkHttpClientImpl {
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self { config, client })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            method
        )
    }
}

/// Turns a raw API answer into the typed payload or the API error it carries.
pub(crate) fn handle_api_response<T: DeserializeOwned + Debug>(
    status: StatusCode,
    body_text: &str,
) -> Result<T, AppError> {
    debug!("Response Status: {}", status);
    debug!("Response Body: {}", body_text);

    if !status.is_success() {
        error!(
            "API request failed. Status: {}, Body: {}",
            status, body_text
        );
        return Err(AppError::Unexpected(status));
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(body_text)?;
    match envelope {
        ApiEnvelope {
            error: Some(err), ..
        } => {
            debug!("API error {}: {}", err.error_code, err.error_msg);
            Err(ApiError::new(err.error_code, err.error_msg).into())
        }
        ApiEnvelope {
            response: Some(response),
            ..
        } => Ok(response),
        _ => Err(AppError::SerializationError(
            "neither response nor error in API answer".to_string(),
        )),
    }
}

#[async_trait]
impl VkHttpClient for VkHttpClientImpl {
    #[instrument(skip(self, actor, params))]
    async fn call<T>(
        &self,
        method: &str,
        actor: &UserActor,
        params: &[(&str, String)],
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned + Debug + Send + 'static,
    {
        let url = self.method_url(method);
        debug!("Calling {} with params {:?}", url, params);

        let mut form: Vec<(&str, String)> = params.to_vec();
        form.push((ACCESS_TOKEN_PARAM, actor.access_token.clone()));
        form.push((VERSION_PARAM, self.config.rest_api.api_version.clone()));

        let response = self.client.post(&url).form(&form).send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        handle_api_response(status, &body_text)
    }

    #[instrument(skip(self, query))]
    async fn fetch(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<(StatusCode, String), AppError> {
        debug!("Sending GET request to {}", url);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        debug!("Response Status: {}", status);
        Ok((status, body_text))
    }
}
