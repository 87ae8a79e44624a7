use crate::application::models::likes::{FriendsOnly, GetListParams, LikeTarget};
use crate::application::models::wall::{WallGetParams, WallPost};
use crate::application::services::likes_service::LikesService;
use crate::application::services::wall_service::WallService;
use crate::constants::BULK_POST_LIMIT;
use crate::error::AppError;
use crate::harness::context::HarnessContext;
use crate::harness::outcome::{ensure_eq, ScenarioError};
use crate::harness::selection::{select_first_matching, select_matching, PostSelector};
use tracing::{debug, info, instrument};

fn target(post: &WallPost) -> LikeTarget {
    LikeTarget::post(post.owner_id, post.id)
}

impl<W: WallService, L: LikesService> HarnessContext<W, L> {
    /// One `wall.get` on the actor's wall with the service's default window.
    /// Nothing is cached.
    pub async fn fetch_recent_posts(&self) -> Result<Vec<WallPost>, AppError> {
        let params = WallGetParams::for_owner(self.actor().user_id);
        let response = self.wall.get(self.actor(), &params).await?;
        Ok(response.items)
    }

    pub async fn first_post(&self, selector: PostSelector) -> Result<WallPost, ScenarioError> {
        let posts = self.fetch_recent_posts().await?;
        let post = select_first_matching(&posts, selector)?;
        let posted_at = post
            .posted_at()
            .map(|at| at.to_rfc3339())
            .unwrap_or_default();
        debug!("Selected post {} ({}) for {}", post.id, posted_at, selector);
        Ok(post)
    }

    /// Posts fed to the bulk add-like scenario.
    pub async fn likeable_posts(&self) -> Result<Vec<WallPost>, ScenarioError> {
        let posts = self.fetch_recent_posts().await?;
        Ok(select_matching(&posts, PostSelector::CanLike, BULK_POST_LIMIT))
    }

    /// Precondition: `post` can be liked. Liking it raises the count by one.
    #[instrument(skip_all, fields(post_id = post.id))]
    pub async fn add_like_to_post(&self, post: &WallPost) -> Result<(), ScenarioError> {
        let count = post.likes.count;

        let response = self.likes.add(self.actor(), target(post)).await?;

        ensure_eq(
            "add_like_to_post",
            "Count after likes.add doesn't change",
            count + 1,
            response.likes,
        )
    }

    /// Precondition: a post already liked by the actor. A second like is a no-op.
    #[instrument(skip_all)]
    pub async fn add_like_to_post_with_like(&self) -> Result<(), ScenarioError> {
        let post = self.first_post(PostSelector::AlreadyLiked).await?;
        let count = post.likes.count;

        let response = self.likes.add(self.actor(), target(&post)).await?;

        ensure_eq(
            "add_like_to_post_with_like",
            "Count change after likes.add on post with like",
            count,
            response.likes,
        )
    }

    /// Precondition: a post already liked by the actor. Unliking lowers the count by one.
    #[instrument(skip_all)]
    pub async fn delete_like_from_post(&self) -> Result<(), ScenarioError> {
        let post = self.first_post(PostSelector::AlreadyLiked).await?;
        let count = post.likes.count;

        let response = self.likes.delete(self.actor(), target(&post)).await?;

        ensure_eq(
            "delete_like_from_post",
            "Likes count doesn't change after likes.delete",
            count - 1,
            response.likes,
        )
    }

    /// Precondition: a post the actor has not liked. The service must deny the call.
    #[instrument(skip_all)]
    pub async fn delete_like_from_post_without_like(&self) -> Result<(), ScenarioError> {
        let post = self.first_post(PostSelector::CanLike).await?;

        match self.likes.delete(self.actor(), target(&post)).await {
            Err(e) if e.is_access_denied() => {
                info!("likes.delete on post {} denied as expected", post.id);
                Ok(())
            }
            Err(e) => Err(e.into()),
            Ok(response) => Err(ScenarioError::assertion(
                "delete_like_from_post_without_like",
                format!(
                    "expected access denied, likes.delete returned count {} (before {})",
                    response.likes, post.likes.count
                ),
            )),
        }
    }

    /// Precondition: a post with likes. The likers list accounts for every like.
    #[instrument(skip_all)]
    pub async fn get_like_list(&self) -> Result<(), ScenarioError> {
        let post = self.first_post(PostSelector::HasLikes).await?;
        let expected = post.likes.count;

        let params = GetListParams::new(target(&post));
        let response = self.likes.get_list(self.actor(), &params).await?;

        ensure_eq(
            "get_like_list",
            "Likes count doesn't match",
            expected,
            response.count,
        )?;
        ensure_eq(
            "get_like_list",
            "Size of likes.getList response is not equal count",
            expected,
            response.items.len() as i64,
        )
    }

    /// Precondition: a post nobody liked. The friends-only list is empty.
    #[instrument(skip_all)]
    pub async fn get_like_list_friends_only(&self) -> Result<(), ScenarioError> {
        let post = self.first_post(PostSelector::NoLikes).await?;

        let params = GetListParams::new(target(&post)).friends_only(FriendsOnly::Friends);
        let response = self.likes.get_list(self.actor(), &params).await?;

        ensure_eq(
            "get_like_list_friends_only",
            "Size of likes.getList response with friends only is not equal count",
            0,
            response.items.len(),
        )
    }

    /// Precondition: a post liked by the actor.
    #[instrument(skip_all)]
    pub async fn is_liked(&self) -> Result<(), ScenarioError> {
        let post = self.first_post(PostSelector::LikedByActor).await?;

        let response = self.likes.is_liked(self.actor(), target(&post)).await?;

        ensure_eq(
            "is_liked",
            "likes.isLiked response on liked post should be true",
            true,
            response.liked,
        )
    }

    /// Precondition: a post not liked by the actor.
    #[instrument(skip_all)]
    pub async fn is_not_liked(&self) -> Result<(), ScenarioError> {
        let post = self.first_post(PostSelector::NotLikedByActor).await?;

        let response = self.likes.is_liked(self.actor(), target(&post)).await?;

        ensure_eq(
            "is_not_liked",
            "likes.isLiked response on non liked post should be false",
            false,
            response.liked,
        )
    }
}
