//! # Core Store Framework
//!
//! This module defines the generic building blocks of the persistence collaborator.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all persisted resource types implement.
//! - [`ResourceActor`]: The generic actor that owns the records of one entity kind.
//! - [`ResourceClient`]: The generic client for communicating with a store actor.
//! - [`FrameworkError`]: Collaborator failures (e.g., ActorClosed, NotFound).
//! - [`Timestamps`]: The created / edited / deleted markers every record carries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Lifecycle markers stamped by the store, never by the caller.
///
/// Serialized flat into the owning record as `createdAt`, `editedAt` and
/// `deletedAt`; each one is `null` until the store sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: Option<DateTime<Utc>>,
    pub edited_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Returns true once the record has been soft deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// By defining a contract that every resource type (User, Category, Post, ...)
/// satisfies, the store loop is written *once* and reused for all of them.
///
/// Associated types keep each store honest: a `User` store only accepts a
/// `UserCreate` payload and only answers `UserQuery` lookups.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier. Identifiers are issued from a `u32` counter, and
    /// ordering on them is the persistence order returned by `List`.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Field lookups supported by this entity (find-by-field).
    /// Use [`std::convert::Infallible`] when the entity has none.
    type Query: Send + Sync + Debug;

    /// The error type raised by the entity hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the issued ID and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update in place.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Whether this record satisfies a field lookup.
    fn matches(&self, query: &Self::Query) -> bool;

    fn timestamps(&self) -> &Timestamps;

    fn timestamps_mut(&mut self) -> &mut Timestamps;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the store actor.
///
/// The variants map onto the collaborator contract the dispatch layer consumes:
///
/// - **Create**: issue an ID, build the record, stamp `created_at`.
/// - **Get**: find by ID.
/// - **FindOne**: find the first record matching an [`ActorEntity::Query`].
/// - **List**: every record in ID order.
/// - **Update**: apply [`ActorEntity::Update`] and stamp `edited_at`.
/// - **Delete**: soft delete, stamping `deleted_at`. The record stays readable.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindOne {
        query: T::Query,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns every record of one entity kind.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel, and processes its messages *sequentially*,
/// so the store needs no `Mutex`. Ordering between concurrent writers to the same
/// record is whatever order their messages reach the channel.
///
/// The store is a `BTreeMap` so that `List` answers in insertion (ID) order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel; when it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "resource_dispatch::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.next_id += 1;
                            // The caller gets the record as submitted; the stored copy is stamped.
                            let submitted = item.clone();
                            let mut stored = item;
                            stored.timestamps_mut().created_at = Some(Utc::now());
                            self.store.insert(id.clone(), stored);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(submitted));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindOne { query, respond_to } => {
                    let item = self.store.values().find(|item| item.matches(&query)).cloned();
                    let found = item.is_some();
                    debug!(entity_type, ?query, found, "FindOne");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        item.timestamps_mut().edited_at = Some(Utc::now());
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get_mut(&id) {
                        let timestamps = item.timestamps_mut();
                        if timestamps.deleted_at.is_none() {
                            timestamps.deleted_at = Some(Utc::now());
                        }
                        let deleted = item.clone();
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(deleted));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so cloning is cheap and clones can be shared across tasks.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: a derive would demand `T: Clone` on the sender's message type too.
impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn find_one(&self, query: T::Query) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FindOne { query, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        body: String,
        locked: bool,
        timestamps: Timestamps,
    }

    #[derive(Debug)]
    struct NoteCreate {
        body: String,
    }

    #[derive(Debug)]
    struct NoteUpdate {
        body: Option<String>,
    }

    #[derive(Debug)]
    enum NoteQuery {
        Body(String),
    }

    #[derive(Debug, thiserror::Error)]
    enum NoteError {
        #[error("Empty note")]
        Empty,
        #[error("Note is locked")]
        Locked,
    }

    impl ActorEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Query = NoteQuery;
        type Error = NoteError;

        fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
            if params.body.is_empty() {
                return Err(NoteError::Empty);
            }
            Ok(Self {
                id,
                locked: params.body.starts_with('!'),
                body: params.body,
                timestamps: Timestamps::default(),
            })
        }

        fn on_update(&mut self, update: NoteUpdate) -> Result<(), NoteError> {
            if self.locked {
                return Err(NoteError::Locked);
            }
            if let Some(body) = update.body {
                self.body = body;
            }
            Ok(())
        }

        fn matches(&self, query: &NoteQuery) -> bool {
            match query {
                NoteQuery::Body(body) => &self.body == body,
            }
        }

        fn timestamps(&self) -> &Timestamps {
            &self.timestamps
        }

        fn timestamps_mut(&mut self) -> &mut Timestamps {
            &mut self.timestamps
        }
    }

    fn spawn_store() -> ResourceClient<Note> {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_create_returns_submitted_record_and_stamps_stored_copy() {
        let client = spawn_store();

        let created = client
            .create(NoteCreate { body: "hello".into() })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert!(created.timestamps.created_at.is_none());

        let stored = client.get(1).await.unwrap().unwrap();
        assert_eq!(stored.body, "hello");
        assert!(stored.timestamps.created_at.is_some());
        assert!(stored.timestamps.edited_at.is_none());
        assert!(stored.timestamps.deleted_at.is_none());
    }

    #[tokio::test]
    async fn test_failed_create_does_not_consume_an_id() {
        let client = spawn_store();

        let result = client.create(NoteCreate { body: String::new() }).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));

        let created = client.create(NoteCreate { body: "a".into() }).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_list_is_in_id_order_and_find_one_matches() {
        let client = spawn_store();
        for body in ["c", "a", "b"] {
            client.create(NoteCreate { body: body.into() }).await.unwrap();
        }

        let ids: Vec<u32> = client.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let found = client.find_one(NoteQuery::Body("a".into())).await.unwrap();
        assert_eq!(found.map(|n| n.id), Some(2));
        let missing = client.find_one(NoteQuery::Body("z".into())).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_stamps_edited_at_and_respects_hook_errors() {
        let client = spawn_store();
        client.create(NoteCreate { body: "open".into() }).await.unwrap();
        client.create(NoteCreate { body: "!locked".into() }).await.unwrap();

        let updated = client
            .update(1, NoteUpdate { body: Some("changed".into()) })
            .await
            .unwrap();
        assert_eq!(updated.body, "changed");
        assert!(updated.timestamps.edited_at.is_some());

        let locked = client.update(2, NoteUpdate { body: Some("x".into()) }).await;
        assert!(matches!(locked, Err(FrameworkError::EntityError(_))));

        let missing = client.update(9, NoteUpdate { body: None }).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "9"));
    }

    #[tokio::test]
    async fn test_delete_is_soft_and_keeps_first_marker() {
        let client = spawn_store();
        client.create(NoteCreate { body: "gone".into() }).await.unwrap();

        let deleted = client.delete(1).await.unwrap();
        let first_marker = deleted.timestamps.deleted_at;
        assert!(first_marker.is_some());

        let still_there = client.get(1).await.unwrap().unwrap();
        assert_eq!(still_there.body, "gone");
        assert!(still_there.timestamps().is_deleted());

        let again = client.delete(1).await.unwrap();
        assert_eq!(again.timestamps.deleted_at, first_marker);

        assert!(matches!(client.delete(2).await, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_closed_store_reports_actor_closed() {
        let (actor, client) = ResourceActor::<Note>::new(1);
        drop(actor);
        assert!(matches!(client.get(1).await, Err(FrameworkError::ActorClosed)));
    }
}
