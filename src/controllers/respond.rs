//! Envelope updates for the successful outcome of each standard action.

use crate::dispatch::{EnvelopeUpdate, ResourceKind};
use serde_json::{json, Value};
use std::fmt::Display;

pub fn created(kind: ResourceKind, id: impl Display, payload: Value) -> EnvelopeUpdate {
    EnvelopeUpdate::success(format!("{kind} saved successfully!"))
        .payload(payload)
        .redirect(format!("/{}/{id}", kind.path()))
        .template(kind.view("ShowView"))
}

pub fn listed(kind: ResourceKind, payload: Value) -> EnvelopeUpdate {
    EnvelopeUpdate::success(format!("{} were retrieved successfully!", kind.plural()))
        .payload(payload)
        .template(kind.view("ListView"))
}

pub fn retrieved(kind: ResourceKind, payload: Value) -> EnvelopeUpdate {
    EnvelopeUpdate::success(format!("{kind} was retrieved successfully!"))
        .payload(payload)
        .template(kind.view("ShowView"))
}

pub fn updated(kind: ResourceKind, id: impl Display, payload: Value) -> EnvelopeUpdate {
    EnvelopeUpdate::success(format!("{kind} updated successfully!"))
        .payload(payload)
        .redirect(format!("/{}/{id}", kind.path()))
        .template(kind.view("ShowView"))
}

pub fn deleted(kind: ResourceKind, payload: Value) -> EnvelopeUpdate {
    EnvelopeUpdate::success(format!("{kind} deleted successfully!"))
        .payload(payload)
        .redirect(format!("/{}", kind.path()))
        .template(kind.view("ShowView"))
}

pub fn new_form(kind: ResourceKind) -> EnvelopeUpdate {
    EnvelopeUpdate::success(format!("New {kind}"))
        .payload(json!({}))
        .template(kind.view("NewFormView"))
}

/// The edit form only echoes the raw segment; the record is not looked up.
pub fn edit_form(kind: ResourceKind, segment: &str) -> EnvelopeUpdate {
    EnvelopeUpdate::success(format!("Edit {kind}"))
        .payload(json!({ "id": segment }))
        .template(kind.view("EditView"))
}
