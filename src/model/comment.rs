use crate::framework::Timestamps;
use crate::model::{CommentId, PostId, UserId};
use serde::{Deserialize, Serialize};

/// A comment on a post, optionally replying to another comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub reply_id: Option<CommentId>,
    pub content: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub post_id: PostId,
    pub user_id: UserId,
    pub reply_id: Option<CommentId>,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentUpdate {
    pub content: Option<String>,
}

impl Comment {
    pub fn new(id: CommentId, params: CommentCreate) -> Self {
        Self {
            id,
            post_id: params.post_id,
            user_id: params.user_id,
            reply_id: params.reply_id,
            content: params.content,
            timestamps: Timestamps::default(),
        }
    }
}
