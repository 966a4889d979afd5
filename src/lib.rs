//! # Resource Dispatch
//!
//! > **Resource-oriented request dispatch over actor-backed stores.**
//!
//! A request arrives as `(verb, path, body)`. It is parsed into a
//! [`Request`](dispatch::Request), routed by its first path segment to a
//! controller, matched to one of the standard actions (list, show, create, update,
//! destroy, and the two form views), and run. The outcome lands in an
//! [`Envelope`](dispatch::Envelope) that is rendered either as a JSON data body or
//! as HTML with redirects.
//!
//! ## Failures
//!
//! Business rule violations surface verbatim as `Cannot <operation> <Entity>: <reason>.`
//! with a 400 (or 401 for a missing session). Unknown resources are 404, unsupported
//! verbs 405. Store failures and panicking actions become a generic 500. The one
//! exception: looking up a related record to embed in a payload never fails the
//! request, it embeds `null` instead.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` store: an in-memory map behind an mpsc channel,
//! one actor task per entity kind, plus [`MockClient`](framework::mock::MockClient)
//! for scripting store answers in tests.
//!
//! ### 2. The Records ([`model`]) and their stores
//! [`user_actor`], [`category_actor`], [`post_actor`], [`comment_actor`],
//! [`pokemon_actor`] implement [`ActorEntity`](framework::ActorEntity) for each record.
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers over the generic client; what controllers talk to.
//!
//! ### 4. The Pipeline ([`dispatch`]) and the handlers ([`controllers`])
//! Parsing, action selection, routing, failure translation, rendering.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Configuration, tracing setup, and [`AppSystem`](lifecycle::AppSystem), which spawns
//! the stores, wires the router, and shuts everything down.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RESOURCE_DISPATCH_CONFIG=dispatch.toml RUST_LOG=debug cargo run
//! ```

pub mod category_actor;
pub mod clients;
pub mod comment_actor;
pub mod controllers;
pub mod dispatch;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod pokemon_actor;
pub mod post_actor;
pub mod user_actor;
