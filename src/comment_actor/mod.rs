//! Comment store.

pub mod entity;

use crate::clients::CommentClient;
use crate::framework::ResourceActor;
use crate::model::Comment;

/// Creates a new Comment actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Comment>, CommentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CommentClient::new(generic_client))
}
