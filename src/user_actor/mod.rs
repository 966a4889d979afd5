//! # User Store
//!
//! The User store is the simplest one: no custom update rules, two find-by-field
//! lookups (`username`, `email`) used for uniqueness checks.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = user_actor::new(32);
//! tokio::spawn(actor.run());
//! let user = client.create(params).await?;
//! ```

pub mod entity;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
