/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/5/25
******************************************************************************/
use crate::presentation::serialization::{bool_from_int, bool_to_int, write_json};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of object a like refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeType {
    Post,
    Comment,
    Photo,
    Audio,
    Video,
    Note,
    Market,
    PhotoComment,
    VideoComment,
    TopicComment,
    MarketComment,
    Sitepage,
}

impl LikeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LikeType::Post => "post",
            LikeType::Comment => "comment",
            LikeType::Photo => "photo",
            LikeType::Audio => "audio",
            LikeType::Video => "video",
            LikeType::Note => "note",
            LikeType::Market => "market",
            LikeType::PhotoComment => "photo_comment",
            LikeType::VideoComment => "video_comment",
            LikeType::TopicComment => "topic_comment",
            LikeType::MarketComment => "market_comment",
            LikeType::Sitepage => "sitepage",
        }
    }
}

impl fmt::Display for LikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility filter of `likes.getList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FriendsOnly {
    #[default]
    All,
    Friends,
}

impl FriendsOnly {
    pub fn as_param(&self) -> &'static str {
        match self {
            FriendsOnly::All => "0",
            FriendsOnly::Friends => "1",
        }
    }
}

/// Reference to the liked object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeTarget {
    pub like_type: LikeType,
    pub owner_id: i64,
    pub item_id: i64,
}

impl LikeTarget {
    pub fn post(owner_id: i64, item_id: i64) -> Self {
        Self {
            like_type: LikeType::Post,
            owner_id,
            item_id,
        }
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("type", self.like_type.as_str().to_string()),
            ("owner_id", self.owner_id.to_string()),
            ("item_id", self.item_id.to_string()),
        ]
    }
}

/// Answer of `likes.add` and `likes.delete`: the like count after the call.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct LikesCountResponse {
    pub likes: i64,
}

/// Answer of `likes.getList` (non extended).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LikesListResponse {
    pub count: i64,
    #[serde(default)]
    pub items: Vec<i64>,
}

impl fmt::Display for LikesListResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}

/// Answer of `likes.isLiked`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct IsLikedResponse {
    #[serde(deserialize_with = "bool_from_int", serialize_with = "bool_to_int")]
    pub liked: bool,
    #[serde(
        default,
        deserialize_with = "bool_from_int",
        serialize_with = "bool_to_int"
    )]
    pub copied: bool,
}

/// Parameters of `likes.getList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetListParams {
    pub target: LikeTarget,
    pub friends_only: FriendsOnly,
}

impl GetListParams {
    pub fn new(target: LikeTarget) -> Self {
        Self {
            target,
            friends_only: FriendsOnly::All,
        }
    }

    pub fn friends_only(mut self, friends_only: FriendsOnly) -> Self {
        self.friends_only = friends_only;
        self
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.target.to_params();
        params.push(("friends_only", self.friends_only.as_param().to_string()));
        params
    }
}
