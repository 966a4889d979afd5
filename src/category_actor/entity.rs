//! Entity trait implementation for the Category record.

use crate::framework::{ActorEntity, Timestamps};
use crate::model::{Category, CategoryCreate, CategoryId, CategoryQuery, CategoryUpdate};
use std::convert::Infallible;

impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Query = CategoryQuery;
    type Error = Infallible;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, Infallible> {
        Ok(Self::new(id, params))
    }

    fn on_update(&mut self, update: CategoryUpdate) -> Result<(), Infallible> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    fn matches(&self, query: &CategoryQuery) -> bool {
        match query {
            CategoryQuery::Title(title) => &self.title == title,
        }
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}
