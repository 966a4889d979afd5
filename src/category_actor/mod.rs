//! Category store. Titles are looked up by [`CategoryQuery::Title`](crate::model::CategoryQuery)
//! to keep them unique.

pub mod entity;

use crate::clients::CategoryClient;
use crate::framework::ResourceActor;
use crate::model::Category;

/// Creates a new Category actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CategoryClient::new(generic_client))
}
