use crate::framework::Timestamps;
use crate::model::PokemonId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone)]
pub struct PokemonCreate {
    pub name: String,
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokemonUpdate {
    pub name: Option<String>,
    pub kind: Option<String>,
}

impl Pokemon {
    pub fn new(id: PokemonId, params: PokemonCreate) -> Self {
        Self {
            id,
            name: params.name,
            kind: params.kind,
            timestamps: Timestamps::default(),
        }
    }
}
