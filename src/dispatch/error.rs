//! # Failure Types and Translation
//!
//! Actions fail with a [`DispatchError`]. Domain failures carry a user-facing
//! message built as `Cannot {operation} {Entity}: {reason}.`; everything else is
//! reported with a generic message so collaborator internals never leak into a
//! response. [`translate`] turns any of them into the envelope update the router
//! writes back.

use crate::dispatch::envelope::{status, EnvelopeUpdate};
use crate::dispatch::resource::ResourceKind;
use crate::framework::FrameworkError;
use serde_json::json;
use std::fmt::{self, Display};
use thiserror::Error;

/// Message sent in place of any internal failure.
pub const GENERIC_FAILURE: &str = "Internal server error!";

/// The verb that appears in a domain failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Retrieve,
    Update,
    Delete,
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Retrieve => "retrieve",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// Why a domain operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("{resource} does not exist with ID {id}")]
    DoesNotExist { resource: ResourceKind, id: String },

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error("Invalid {0}")]
    Invalid(&'static str),

    #[error("{0} cannot be changed")]
    Immutable(&'static str),

    #[error("No update parameters were provided")]
    NoUpdateParameters,

    #[error("Only text posts can be edited")]
    NotEditable,

    #[error("You must be logged in")]
    Unauthorized,
}

impl Reason {
    pub fn does_not_exist(resource: ResourceKind, id: impl Display) -> Self {
        Self::DoesNotExist {
            resource,
            id: id.to_string(),
        }
    }

    /// Status the reason asks for instead of the default 400.
    pub fn suggested_status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(status::UNAUTHORIZED),
            _ => None,
        }
    }
}

/// A failure of a domain rule, tagged with the entity kind that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot {operation} {resource}: {reason}.")]
pub struct DomainError {
    pub resource: ResourceKind,
    pub operation: Operation,
    pub reason: Reason,
}

impl DomainError {
    pub fn new(resource: ResourceKind, operation: Operation, reason: Reason) -> Self {
        Self {
            resource,
            operation,
            reason,
        }
    }

    pub fn status(&self) -> u16 {
        self.reason
            .suggested_status()
            .unwrap_or(status::BAD_REQUEST)
    }
}

/// Everything an action or the router can fail with.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request path!")]
    InvalidPath,

    #[error("Invalid request method!")]
    MethodNotAllowed,

    #[error("Collaborator failed: {0}")]
    Collaborator(#[from] FrameworkError),

    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Action task failed: {0}")]
    Panicked(String),
}

impl DispatchError {
    pub fn status(&self) -> u16 {
        match self {
            Self::Domain(e) => e.status(),
            Self::InvalidPath => status::NOT_FOUND,
            Self::MethodNotAllowed => status::METHOD_NOT_ALLOWED,
            Self::Collaborator(_) | Self::Serialization(_) | Self::Panicked(_) => {
                status::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message a client is allowed to see.
    pub fn public_message(&self) -> String {
        match self {
            Self::Domain(_) | Self::InvalidPath | Self::MethodNotAllowed => self.to_string(),
            Self::Collaborator(_) | Self::Serialization(_) | Self::Panicked(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }

    /// True when the failure is the caller's fault rather than ours.
    pub fn is_client_error(&self) -> bool {
        self.status() < status::INTERNAL_SERVER_ERROR
    }
}

/// Converts a failure into the envelope update written in place of the action's
/// result. The payload is always reset to an empty object.
pub fn translate(error: &DispatchError) -> EnvelopeUpdate {
    EnvelopeUpdate::new()
        .status(error.status())
        .message(error.public_message())
        .payload(json!({}))
}
