use crate::framework::Timestamps;
use crate::model::{CategoryId, PostId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The two kinds of post. Link posts cannot be edited once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    Text,
    #[serde(rename = "URL")]
    Url,
}

impl PostType {
    /// Parses the submitted form value, ignoring ASCII case.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("text") {
            Some(Self::Text)
        } else if value.eq_ignore_ascii_case("url") {
            Some(Self::Url)
        } else {
            None
        }
    }
}

impl Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Url => write!(f, "URL"),
        }
    }
}

/// Represents a post in a category.
///
/// # Store
/// See [`impl ActorEntity for Post`](#impl-ActorEntity-for-Post) for details on:
/// - Creation parameters ([`PostCreate`])
/// - Update parameters ([`PostUpdate`]), rejected for [`PostType::Url`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PostType,
    pub content: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone)]
pub struct PostCreate {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub title: String,
    pub kind: PostType,
    pub content: String,
}

/// Title and content of a text post are editable; author, category and type are fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    pub fn new(id: PostId, params: PostCreate) -> Self {
        Self {
            id,
            user_id: params.user_id,
            category_id: params.category_id,
            title: params.title,
            kind: params.kind,
            content: params.content,
            timestamps: Timestamps::default(),
        }
    }

    pub fn is_editable(&self) -> bool {
        self.kind == PostType::Text
    }
}
