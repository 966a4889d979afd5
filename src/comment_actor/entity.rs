use crate::framework::{ActorEntity, Timestamps};
use crate::model::{Comment, CommentCreate, CommentId, CommentUpdate};
use std::convert::Infallible;

impl ActorEntity for Comment {
    type Id = CommentId;
    type Create = CommentCreate;
    type Update = CommentUpdate;
    type Query = Infallible;
    type Error = Infallible;

    fn from_create_params(id: CommentId, params: CommentCreate) -> Result<Self, Infallible> {
        Ok(Self::new(id, params))
    }

    fn on_update(&mut self, update: CommentUpdate) -> Result<(), Infallible> {
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
