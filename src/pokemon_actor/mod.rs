//! Pokemon store.

pub mod entity;

use crate::clients::PokemonClient;
use crate::framework::ResourceActor;
use crate::model::Pokemon;

/// Creates a new Pokemon actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Pokemon>, PokemonClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PokemonClient::new(generic_client))
}
