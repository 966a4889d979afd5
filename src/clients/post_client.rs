use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::Post;

/// Client for interacting with the Post store.
#[derive(Clone)]
pub struct PostClient {
    inner: ResourceClient<Post>,
}

impl PostClient {
    pub fn new(inner: ResourceClient<Post>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Post> for PostClient {
    fn inner(&self) -> &ResourceClient<Post> {
        &self.inner
    }
}
