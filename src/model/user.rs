use crate::framework::Timestamps;
use crate::model::UserId;
use serde::{Deserialize, Serialize};

/// Represents a registered user.
///
/// # Store
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// The password is kept for the record but never serialized into a payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

/// Payload for updating an existing user. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

/// Find-by-field lookups for users.
#[derive(Debug, Clone)]
pub enum UserQuery {
    Username(String),
    Email(String),
}

impl User {
    /// Creates a new User record with no timestamps set.
    pub fn new(id: UserId, params: UserCreate) -> Self {
        Self {
            id,
            username: params.username,
            email: params.email,
            password: params.password,
            avatar: params.avatar,
            timestamps: Timestamps::default(),
        }
    }
}
