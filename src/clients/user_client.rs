use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserQuery};
use tracing::{debug, instrument};

/// Client for interacting with the User store.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, FrameworkError> {
        debug!("Sending request");
        self.inner
            .find_one(UserQuery::Username(username.to_string()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, FrameworkError> {
        debug!("Sending request");
        self.inner.find_one(UserQuery::Email(email.to_string())).await
    }
}

impl ActorClient<User> for UserClient {
    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }
}
