//! # ActorClient Trait
//!
//! The collaborator contract shared by every entity kind, built on top of a
//! generic [`ResourceClient`].

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// Implementors only provide [`inner`](ActorClient::inner); every operation has a
/// default implementation that forwards to the store actor.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Persist a new record. The returned record is the submitted one; its
    /// `created_at` is stamped on the stored copy only.
    #[tracing::instrument(skip(self))]
    async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().create(params).await
    }

    /// Fetch a record by ID, soft-deleted ones included.
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// Every record in ID order.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().list().await
    }

    /// Apply an update and return the saved record.
    #[tracing::instrument(skip(self))]
    async fn save(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().update(id, update).await
    }

    /// Soft delete a record and return it with `deleted_at` set.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<T, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}
