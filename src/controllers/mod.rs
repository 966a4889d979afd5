//! # Controllers
//!
//! One [`Controller`](crate::dispatch::Controller) per resource name, plus the home
//! page. Each controller validates the body, talks to the stores through the
//! [`clients`](crate::clients), and returns the envelope update for the action.

pub mod category;
pub mod comment;
pub mod home;
pub mod pokemon;
pub mod post;
pub mod records;
pub mod respond;
pub mod user;
pub mod validate;

pub use category::CategoryController;
pub use comment::CommentController;
pub use home::HomeController;
pub use pokemon::PokemonController;
pub use post::PostController;
pub use user::UserController;
