use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::Comment;

/// Client for interacting with the Comment store.
#[derive(Clone)]
pub struct CommentClient {
    inner: ResourceClient<Comment>,
}

impl CommentClient {
    pub fn new(inner: ResourceClient<Comment>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Comment> for CommentClient {
    fn inner(&self) -> &ResourceClient<Comment> {
        &self.inner
    }
}
