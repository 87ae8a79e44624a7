/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/5/25
******************************************************************************/
use crate::presentation::serialization::{bool_from_int, bool_to_int, write_json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer of `wall.get`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WallGetResponse {
    pub count: i64,
    pub items: Vec<WallPost>,
}

/// A wall post as returned by `wall.get`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct WallPost {
    pub id: i64,
    pub owner_id: i64,
    #[serde(default)]
    pub from_id: i64,
    #[serde(default)]
    pub date: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub likes: PostLikes,
}

/// Like counters attached to a post.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PostLikes {
    pub count: i64,
    /// How many times the current actor liked the post (0 or 1).
    #[serde(default)]
    pub user_likes: i64,
    #[serde(
        default,
        deserialize_with = "bool_from_int",
        serialize_with = "bool_to_int"
    )]
    pub can_like: bool,
    #[serde(
        default,
        deserialize_with = "bool_from_int",
        serialize_with = "bool_to_int"
    )]
    pub can_publish: bool,
}

impl WallPost {
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    pub fn is_liked_by_actor(&self) -> bool {
        self.likes.user_likes > 0
    }
}

impl fmt::Display for WallPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}

/// Parameters of `wall.get`. Without an owner the service returns the actor's wall.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallGetParams {
    pub owner_id: Option<i64>,
}

impl WallGetParams {
    pub fn for_owner(owner_id: i64) -> Self {
        Self {
            owner_id: Some(owner_id),
        }
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        self.owner_id
            .map(|owner_id| vec![("owner_id", owner_id.to_string())])
            .unwrap_or_default()
    }
}
