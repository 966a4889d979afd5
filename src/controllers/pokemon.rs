use super::{records, respond, validate};
use crate::clients::{ActorClient, PokemonClient};
use crate::dispatch::{
    ActionKind, Controller, DispatchError, DomainError, EnvelopeUpdate, Operation, Request,
    ResourceKind,
};
use crate::model::{Pokemon, PokemonId};
use async_trait::async_trait;

const KIND: ResourceKind = ResourceKind::Pokemon;

pub struct PokemonController {
    pokemon: PokemonClient,
}

impl PokemonController {
    pub fn new(pokemon: PokemonClient) -> Self {
        Self { pokemon }
    }
}

#[async_trait]
impl Controller for PokemonController {
    fn kind(&self) -> Option<ResourceKind> {
        Some(KIND)
    }

    async fn run(
        &self,
        action: ActionKind,
        request: &Request,
    ) -> Result<EnvelopeUpdate, DispatchError> {
        match action {
            ActionKind::Create => {
                let params = validate::pokemon_create(request.body())
                    .map_err(|reason| DomainError::new(KIND, Operation::Create, reason))?;
                let pokemon = self.pokemon.create(params).await?;
                Ok(respond::created(KIND, pokemon.id, records::to_payload(&pokemon)?))
            }
            ActionKind::List => {
                let pokemon = self.pokemon.find_all().await?;
                Ok(respond::listed(KIND, records::to_payload(&pokemon)?))
            }
            ActionKind::Show => {
                let pokemon: Pokemon =
                    records::find(&self.pokemon, KIND, Operation::Retrieve, request).await?;
                Ok(respond::retrieved(KIND, records::to_payload(&pokemon)?))
            }
            ActionKind::ShowNewForm => Ok(respond::new_form(KIND)),
            ActionKind::ShowEditForm => Ok(respond::edit_form(
                KIND,
                request.segment(0).unwrap_or_default(),
            )),
            ActionKind::Update => {
                let update = validate::pokemon_update(request.body())
                    .map_err(|reason| DomainError::new(KIND, Operation::Update, reason))?;
                let id: PokemonId = records::record_id(KIND, Operation::Update, request)?;
                let pokemon: Pokemon = records::save(&self.pokemon, KIND, id, update).await?;
                Ok(respond::updated(KIND, pokemon.id, records::to_payload(&pokemon)?))
            }
            ActionKind::Destroy => {
                let pokemon: Pokemon = records::remove(&self.pokemon, KIND, request).await?;
                Ok(respond::deleted(KIND, records::to_payload(&pokemon)?))
            }
            ActionKind::MethodNotAllowed => Err(DispatchError::MethodNotAllowed),
        }
    }
}
