//! Entity trait implementation for the Post record.
//!
//! The update hook refuses to touch link posts even if the caller skipped the
//! check, so the store never holds an edited link post.

use super::error::PostError;
use crate::framework::{ActorEntity, Timestamps};
use crate::model::{Post, PostCreate, PostId, PostUpdate};
use std::convert::Infallible;

impl ActorEntity for Post {
    type Id = PostId;
    type Create = PostCreate;
    type Update = PostUpdate;
    type Query = Infallible;
    type Error = PostError;

    fn from_create_params(id: PostId, params: PostCreate) -> Result<Self, PostError> {
        Ok(Self::new(id, params))
    }

    fn on_update(&mut self, update: PostUpdate) -> Result<(), PostError> {
        if !self.is_editable() {
            return Err(PostError::LinkPostImmutable(self.id));
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        Ok(())
    }

    fn matches(&self, query: &Infallible) -> bool {
        match *query {}
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}
