use crate::application::models::wall::WallPost;
use crate::harness::outcome::ScenarioError;
use std::fmt;

/// Fixture preconditions a scenario needs from the post it exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostSelector {
    /// The actor may still like the post.
    CanLike,
    /// The actor can no longer like the post, i.e. it already did.
    AlreadyLiked,
    /// At least one like from anybody.
    HasLikes,
    /// Nobody liked the post.
    NoLikes,
    LikedByActor,
    NotLikedByActor,
}

impl PostSelector {
    pub fn matches(&self, post: &WallPost) -> bool {
        match self {
            PostSelector::CanLike => post.likes.can_like,
            PostSelector::AlreadyLiked => !post.likes.can_like,
            PostSelector::HasLikes => post.likes.count > 0,
            PostSelector::NoLikes => post.likes.count == 0,
            PostSelector::LikedByActor => post.is_liked_by_actor(),
            PostSelector::NotLikedByActor => !post.is_liked_by_actor(),
        }
    }
}

impl fmt::Display for PostSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PostSelector::CanLike => "likes.can_like",
            PostSelector::AlreadyLiked => "!likes.can_like",
            PostSelector::HasLikes => "likes.count > 0",
            PostSelector::NoLikes => "likes.count == 0",
            PostSelector::LikedByActor => "likes.user_likes > 0",
            PostSelector::NotLikedByActor => "likes.user_likes == 0",
        };
        f.write_str(s)
    }
}

/// First post in service order that satisfies `selector`.
pub fn select_first_matching(
    posts: &[WallPost],
    selector: PostSelector,
) -> Result<WallPost, ScenarioError> {
    posts
        .iter()
        .find(|post| selector.matches(post))
        .cloned()
        .ok_or(ScenarioError::Precondition { selector })
}

/// Up to `limit` posts satisfying `selector`, in service order.
pub fn select_matching(posts: &[WallPost], selector: PostSelector, limit: usize) -> Vec<WallPost> {
    posts
        .iter()
        .filter(|post| selector.matches(post))
        .take(limit)
        .cloned()
        .collect()
}
