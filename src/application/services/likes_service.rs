use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    application::models::likes::{
        GetListParams, IsLikedResponse, LikeTarget, LikesCountResponse, LikesListResponse,
    },
    error::AppError,
    session::interface::UserActor,
    transport::http_client::VkHttpClient,
};

/// Access to the `likes.*` methods.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikesService: Send + Sync {
    /// Likes the target and returns the new like count.
    async fn add(&self, actor: &UserActor, target: LikeTarget)
        -> Result<LikesCountResponse, AppError>;

    /// Removes the actor's like and returns the new like count.
    async fn delete(
        &self,
        actor: &UserActor,
        target: LikeTarget,
    ) -> Result<LikesCountResponse, AppError>;

    /// Lists the ids of users who liked the target.
    async fn get_list(
        &self,
        actor: &UserActor,
        params: &GetListParams,
    ) -> Result<LikesListResponse, AppError>;

    /// Tells whether the actor liked the target.
    async fn is_liked(
        &self,
        actor: &UserActor,
        target: LikeTarget,
    ) -> Result<IsLikedResponse, AppError>;
}

pub struct LikesServiceImpl<T: VkHttpClient> {
    client: Arc<T>,
}

impl<T: VkHttpClient> LikesServiceImpl<T> {
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: VkHttpClient + 'static> LikesService for LikesServiceImpl<T> {
    async fn add(
        &self,
        actor: &UserActor,
        target: LikeTarget,
    ) -> Result<LikesCountResponse, AppError> {
        info!("Adding like to {} {}_{}", target.like_type, target.owner_id, target.item_id);

        let result = self
            .client
            .call::<LikesCountResponse>("likes.add", actor, &target.to_params())
            .await?;

        debug!("Like count after add: {}", result.likes);
        Ok(result)
    }

    async fn delete(
        &self,
        actor: &UserActor,
        target: LikeTarget,
    ) -> Result<LikesCountResponse, AppError> {
        info!(
            "Deleting like from {} {}_{}",
            target.like_type, target.owner_id, target.item_id
        );

        let result = self
            .client
            .call::<LikesCountResponse>("likes.delete", actor, &target.to_params())
            .await?;

        debug!("Like count after delete: {}", result.likes);
        Ok(result)
    }

    async fn get_list(
        &self,
        actor: &UserActor,
        params: &GetListParams,
    ) -> Result<LikesListResponse, AppError> {
        info!(
            "Listing likers of {} {}_{}",
            params.target.like_type, params.target.owner_id, params.target.item_id
        );

        let result = self
            .client
            .call::<LikesListResponse>("likes.getList", actor, &params.to_params())
            .await?;

        debug!(
            "Likers listed: {} ids of {} likes",
            result.items.len(),
            result.count
        );
        Ok(result)
    }

    async fn is_liked(
        &self,
        actor: &UserActor,
        target: LikeTarget,
    ) -> Result<IsLikedResponse, AppError> {
        info!(
            "Checking like on {} {}_{}",
            target.like_type, target.owner_id, target.item_id
        );

        let mut params = target.to_params();
        params.push(("user_id", actor.user_id.to_string()));

        let result = self
            .client
            .call::<IsLikedResponse>("likes.isLiked", actor, &params)
            .await?;

        debug!("Liked: {}, copied: {}", result.liked, result.copied);
        Ok(result)
    }
}
