//! Pure data structures (records and DTOs) implementing the
//! [`ActorEntity`](crate::framework::ActorEntity) trait.
//!
//! Every record serializes in camelCase with its [`Timestamps`](crate::framework::Timestamps)
//! flattened in, which is the shape the data-mode envelope puts in `payload`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// Declares a type-safe numeric identifier.
///
/// Identifiers serialize as bare numbers and display without a prefix, so an error
/// message reads `User does not exist with ID 7`.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

resource_id!(
    /// Type-safe identifier for Users.
    UserId
);
resource_id!(
    /// Type-safe identifier for Categories.
    CategoryId
);
resource_id!(
    /// Type-safe identifier for Posts.
    PostId
);
resource_id!(
    /// Type-safe identifier for Comments.
    CommentId
);
resource_id!(
    /// Type-safe identifier for Pokemon.
    PokemonId
);

pub mod category;
pub mod comment;
pub mod pokemon;
pub mod post;
pub mod user;

pub use category::*;
pub use comment::*;
pub use pokemon::*;
pub use post::*;
pub use user::*;
