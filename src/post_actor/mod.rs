//! Post store, including the rule that link posts are immutable.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PostClient;
use crate::framework::ResourceActor;
use crate::model::Post;

/// Creates a new Post actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Post>, PostClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PostClient::new(generic_client))
}
