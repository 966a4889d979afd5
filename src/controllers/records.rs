//! Store access shared by every resource controller.
//!
//! Identifier segments that don't parse are reported exactly like identifiers that
//! aren't in the store: `{Entity} does not exist with ID {segment}`.

use crate::clients::ActorClient;
use crate::dispatch::{DispatchError, DomainError, Operation, Reason, Request, ResourceKind};
use crate::framework::{ActorEntity, FrameworkError};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

pub fn does_not_exist(kind: ResourceKind, operation: Operation, id: &str) -> DomainError {
    DomainError::new(kind, operation, Reason::does_not_exist(kind, id))
}

/// Parses the identifier segment of `request`.
pub fn record_id<I: FromStr>(
    kind: ResourceKind,
    operation: Operation,
    request: &Request,
) -> Result<I, DomainError> {
    let raw = request.segment(0).unwrap_or_default();
    raw.parse()
        .map_err(|_| does_not_exist(kind, operation, raw))
}

/// Loads the record named by the identifier segment.
pub async fn find<T, C>(
    client: &C,
    kind: ResourceKind,
    operation: Operation,
    request: &Request,
) -> Result<T, DispatchError>
where
    T: ActorEntity,
    T::Id: FromStr,
    C: ActorClient<T>,
{
    let id: T::Id = record_id(kind, operation, request)?;
    let raw = request.segment(0).unwrap_or_default();
    client
        .find_by_id(id)
        .await?
        .ok_or_else(|| does_not_exist(kind, operation, raw).into())
}

/// Applies `update` to the record with `id`.
pub async fn save<T, C>(
    client: &C,
    kind: ResourceKind,
    id: T::Id,
    update: T::Update,
) -> Result<T, DispatchError>
where
    T: ActorEntity,
    C: ActorClient<T>,
{
    let raw = id.to_string();
    match client.save(id, update).await {
        Ok(record) => Ok(record),
        Err(FrameworkError::NotFound(_)) => Err(does_not_exist(kind, Operation::Update, &raw).into()),
        Err(e) => Err(e.into()),
    }
}

/// Soft deletes the record named by the identifier segment.
pub async fn remove<T, C>(client: &C, kind: ResourceKind, request: &Request) -> Result<T, DispatchError>
where
    T: ActorEntity,
    T::Id: FromStr,
    C: ActorClient<T>,
{
    let id: T::Id = record_id(kind, Operation::Delete, request)?;
    let raw = request.segment(0).unwrap_or_default();
    match client.remove(id).await {
        Ok(record) => Ok(record),
        Err(FrameworkError::NotFound(_)) => Err(does_not_exist(kind, Operation::Delete, raw).into()),
        Err(e) => Err(e.into()),
    }
}

/// Serializes a record into a payload value.
pub fn to_payload<S: Serialize>(record: &S) -> Result<Value, DispatchError> {
    Ok(serde_json::to_value(record)?)
}

/// Looks up a related record to embed in a payload.
///
/// Any failure, including a collaborator error, embeds `null` instead of failing the
/// request.
pub async fn embed<T, C>(client: &C, id: T::Id) -> Value
where
    T: ActorEntity + Serialize,
    C: ActorClient<T>,
{
    match client.find_by_id(id).await {
        Ok(Some(record)) => serde_json::to_value(&record).unwrap_or(Value::Null),
        Ok(None) => Value::Null,
        Err(e) => {
            warn!(error = %e, "Related record lookup failed, embedding null");
            Value::Null
        }
    }
}

/// Adds `related` entries to a serialized record.
pub fn with_related(record: Value, related: Vec<(&'static str, Value)>) -> Value {
    match record {
        Value::Object(mut fields) => {
            for (name, value) in related {
                fields.insert(name.to_string(), value);
            }
            Value::Object(fields)
        }
        other => other,
    }
}

/// Confirms a referenced record exists, reporting it under the operation that needs it.
pub async fn require_related<T, C>(
    client: &C,
    owner: ResourceKind,
    related: ResourceKind,
    id: T::Id,
) -> Result<T, DispatchError>
where
    T: ActorEntity,
    C: ActorClient<T>,
{
    let raw = id.to_string();
    client.find_by_id(id).await?.ok_or_else(|| {
        DomainError::new(owner, Operation::Create, Reason::does_not_exist(related, raw)).into()
    })
}
