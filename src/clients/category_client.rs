use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Category, CategoryQuery};
use tracing::{debug, instrument};

/// Client for interacting with the Category store.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Category>, FrameworkError> {
        debug!("Sending request");
        self.inner
            .find_one(CategoryQuery::Title(title.to_string()))
            .await
    }
}

impl ActorClient<Category> for CategoryClient {
    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }
}
