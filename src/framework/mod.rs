//! Generic store framework for resource management.
//!
//! This module provides the building blocks of the persistence collaborator: one
//! actor per entity kind, owning its records and answering CRUD + lookup messages.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the records of one entity kind
//! - [`ResourceClient`] - Type-safe client for talking to a store actor
//! - [`FrameworkError`] - Collaborator failures
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test controllers without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
