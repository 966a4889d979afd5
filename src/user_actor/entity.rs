//! Entity trait implementation for the User record.

use crate::framework::{ActorEntity, Timestamps};
use crate::model::{User, UserCreate, UserId, UserQuery, UserUpdate};
use std::convert::Infallible;

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Query = UserQuery;
    type Error = Infallible;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Infallible> {
        Ok(Self::new(id, params))
    }

    /// # Fields Updated
    /// - `username`
    /// - `email`
    /// - `password`
    /// - `avatar`
    fn on_update(&mut self, update: UserUpdate) -> Result<(), Infallible> {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
        Ok(())
    }

    fn matches(&self, query: &UserQuery) -> bool {
        match query {
            UserQuery::Username(username) => &self.username == username,
            UserQuery::Email(email) => &self.email == email,
        }
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}
