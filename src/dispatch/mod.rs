//! # Dispatch
//!
//! The request pipeline: [`Request`] parsing, action selection, the [`Router`] that
//! runs controllers, the [`Envelope`] they write into, failure translation, and
//! rendering in data or markup mode.

pub mod envelope;
pub mod error;
pub mod render;
pub mod request;
pub mod resource;
pub mod router;
pub mod selector;

pub use envelope::{status, Envelope, EnvelopeUpdate};
pub use error::{translate, DispatchError, DomainError, Operation, Reason};
pub use render::{RenderMode, Rendered, TemplateError, Templates};
pub use request::{BodyParameters, Request, Verb};
pub use resource::ResourceKind;
pub use router::{Controller, InvalidPathController, Router};
pub use selector::{select, ActionKind};
