use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::Pokemon;

/// Client for interacting with the Pokemon store.
#[derive(Clone)]
pub struct PokemonClient {
    inner: ResourceClient<Pokemon>,
}

impl PokemonClient {
    pub fn new(inner: ResourceClient<Pokemon>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Pokemon> for PokemonClient {
    fn inner(&self) -> &ResourceClient<Pokemon> {
        &self.inner
    }
}
