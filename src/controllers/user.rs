use super::{records, respond, validate};
use crate::clients::{ActorClient, UserClient};
use crate::dispatch::{
    ActionKind, Controller, DispatchError, DomainError, EnvelopeUpdate, Operation, Reason,
    Request, ResourceKind,
};
use crate::model::{User, UserId};
use async_trait::async_trait;
use tracing::{debug, instrument};

const KIND: ResourceKind = ResourceKind::User;

/// Registration and profile actions. Users are the one resource that can be
/// written without a session.
pub struct UserController {
    users: UserClient,
}

impl UserController {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    /// Rejects a username or email already held by a user other than `except`.
    async fn ensure_unique(
        &self,
        operation: Operation,
        username: Option<&str>,
        email: Option<&str>,
        except: Option<UserId>,
    ) -> Result<(), DispatchError> {
        let taken = |user: Option<User>| user.is_some_and(|user| Some(user.id) != except);

        if let Some(username) = username {
            if taken(self.users.find_by_username(username).await?) {
                return Err(DomainError::new(KIND, operation, Reason::AlreadyExists("Username")).into());
            }
        }
        if let Some(email) = email {
            if taken(self.users.find_by_email(email).await?) {
                return Err(DomainError::new(KIND, operation, Reason::AlreadyExists("Email")).into());
            }
        }
        Ok(())
    }

    #[instrument(skip_all)]
    async fn create(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let params = validate::user_create(request.body())
            .map_err(|reason| DomainError::new(KIND, Operation::Create, reason))?;
        self.ensure_unique(
            Operation::Create,
            Some(&params.username),
            Some(&params.email),
            None,
        )
        .await?;

        debug!(username = %params.username, "Creating user");
        let user = self.users.create(params).await?;
        Ok(respond::created(KIND, user.id, records::to_payload(&user)?))
    }

    async fn list(&self) -> Result<EnvelopeUpdate, DispatchError> {
        let users = self.users.find_all().await?;
        Ok(respond::listed(KIND, records::to_payload(&users)?))
    }

    async fn show(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let user: User = records::find(&self.users, KIND, Operation::Retrieve, request).await?;
        Ok(respond::retrieved(KIND, records::to_payload(&user)?))
    }

    #[instrument(skip_all)]
    async fn update(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let update = validate::user_update(request.body())
            .map_err(|reason| DomainError::new(KIND, Operation::Update, reason))?;
        let existing: User = records::find(&self.users, KIND, Operation::Update, request).await?;
        self.ensure_unique(
            Operation::Update,
            update.username.as_deref(),
            update.email.as_deref(),
            Some(existing.id),
        )
        .await?;

        let user: User = records::save(&self.users, KIND, existing.id, update).await?;
        Ok(respond::updated(KIND, user.id, records::to_payload(&user)?))
    }

    async fn destroy(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let user: User = records::remove(&self.users, KIND, request).await?;
        Ok(respond::deleted(KIND, records::to_payload(&user)?))
    }
}

#[async_trait]
impl Controller for UserController {
    fn kind(&self) -> Option<ResourceKind> {
        Some(KIND)
    }

    fn requires_session(&self, _action: ActionKind) -> bool {
        false
    }

    async fn run(
        &self,
        action: ActionKind,
        request: &Request,
    ) -> Result<EnvelopeUpdate, DispatchError> {
        match action {
            ActionKind::Create => self.create(request).await,
            ActionKind::List => self.list().await,
            ActionKind::Show => self.show(request).await,
            ActionKind::ShowNewForm => Ok(respond::new_form(KIND)),
            ActionKind::ShowEditForm => Ok(respond::edit_form(
                KIND,
                request.segment(0).unwrap_or_default(),
            )),
            ActionKind::Update => self.update(request).await,
            ActionKind::Destroy => self.destroy(request).await,
            ActionKind::MethodNotAllowed => Err(DispatchError::MethodNotAllowed),
        }
    }
}
