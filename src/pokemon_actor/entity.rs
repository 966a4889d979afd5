use crate::framework::{ActorEntity, Timestamps};
use crate::model::{Pokemon, PokemonCreate, PokemonId, PokemonUpdate};
use std::convert::Infallible;

impl ActorEntity for Pokemon {
    type Id = PokemonId;
    type Create = PokemonCreate;
    type Update = PokemonUpdate;
    type Query = Infallible;
    type Error = Infallible;

    fn from_create_params(id: PokemonId, params: PokemonCreate) -> Result<Self, Infallible> {
        Ok(Self::new(id, params))
    }

    fn on_update(&mut self, update: PokemonUpdate) -> Result<(), Infallible> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
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
