use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    application::models::wall::{WallGetParams, WallGetResponse},
    error::AppError,
    session::interface::UserActor,
    transport::http_client::VkHttpClient,
};

/// Access to the `wall.*` methods.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WallService: Send + Sync {
    /// Fetches wall posts; with default params this is the actor's most recent window.
    async fn get(
        &self,
        actor: &UserActor,
        params: &WallGetParams,
    ) -> Result<WallGetResponse, AppError>;
}

pub struct WallServiceImpl<T: VkHttpClient> {
    client: Arc<T>,
}

impl<T: VkHttpClient> WallServiceImpl<T> {
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: VkHttpClient + 'static> WallService for WallServiceImpl<T> {
    async fn get(
        &self,
        actor: &UserActor,
        params: &WallGetParams,
    ) -> Result<WallGetResponse, AppError> {
        info!("Fetching wall posts for user {}", actor.user_id);

        let result = self
            .client
            .call::<WallGetResponse>("wall.get", actor, &params.to_params())
            .await?;

        debug!(
            "Wall posts fetched: {} of {} posts",
            result.items.len(),
            result.count
        );
        Ok(result)
    }
}
