//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! These are the persistence collaborator as the controllers see it: the generic
//! find / list / save / remove operations come from [`ActorClient`], and each
//! wrapper adds its own find-by-field lookups.

pub mod actor_client;
pub mod category_client;
pub mod comment_client;
pub mod pokemon_client;
pub mod post_client;
pub mod user_client;

pub use actor_client::*;
pub use category_client::*;
pub use comment_client::*;
pub use pokemon_client::*;
pub use post_client::*;
pub use user_client::*;
