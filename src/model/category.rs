use crate::framework::Timestamps;
use crate::model::{CategoryId, UserId};
use serde::{Deserialize, Serialize};

/// A category that posts are filed under, owned by the user who created it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CategoryQuery {
    Title(String),
}

impl Category {
    pub fn new(id: CategoryId, params: CategoryCreate) -> Self {
        Self {
            id,
            user_id: params.user_id,
            title: params.title,
            description: params.description,
            timestamps: Timestamps::default(),
        }
    }
}
