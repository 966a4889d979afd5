use super::{records, respond, validate};
use crate::clients::{ActorClient, CategoryClient, UserClient};
use crate::dispatch::{
    ActionKind, Controller, DispatchError, DomainError, EnvelopeUpdate, Operation, Reason,
    Request, ResourceKind,
};
use crate::model::{Category, CategoryId, User};
use async_trait::async_trait;
use serde_json::Value;

const KIND: ResourceKind = ResourceKind::Category;

/// Category actions. Payloads embed the owning user.
pub struct CategoryController {
    categories: CategoryClient,
    users: UserClient,
}

impl CategoryController {
    pub fn new(categories: CategoryClient, users: UserClient) -> Self {
        Self { categories, users }
    }

    async fn hydrate(&self, category: &Category) -> Result<Value, DispatchError> {
        let user = records::embed::<User, _>(&self.users, category.user_id).await;
        Ok(records::with_related(
            records::to_payload(category)?,
            vec![("user", user)],
        ))
    }

    async fn ensure_unique_title(
        &self,
        operation: Operation,
        title: &str,
        except: Option<CategoryId>,
    ) -> Result<(), DispatchError> {
        match self.categories.find_by_title(title).await? {
            Some(existing) if Some(existing.id) != except => {
                Err(DomainError::new(KIND, operation, Reason::AlreadyExists("Title")).into())
            }
            _ => Ok(()),
        }
    }

    async fn create(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let params = validate::category_create(request.body())
            .map_err(|reason| DomainError::new(KIND, Operation::Create, reason))?;
        records::require_related::<User, _>(&self.users, KIND, ResourceKind::User, params.user_id)
            .await?;
        self.ensure_unique_title(Operation::Create, &params.title, None)
            .await?;

        let category = self.categories.create(params).await?;
        let payload = self.hydrate(&category).await?;
        Ok(respond::created(KIND, category.id, payload))
    }

    async fn list(&self) -> Result<EnvelopeUpdate, DispatchError> {
        let mut payload = Vec::new();
        for category in self.categories.find_all().await? {
            payload.push(self.hydrate(&category).await?);
        }
        Ok(respond::listed(KIND, Value::Array(payload)))
    }

    async fn show(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let category: Category =
            records::find(&self.categories, KIND, Operation::Retrieve, request).await?;
        Ok(respond::retrieved(KIND, self.hydrate(&category).await?))
    }

    async fn update(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let update = validate::category_update(request.body())
            .map_err(|reason| DomainError::new(KIND, Operation::Update, reason))?;
        let existing: Category =
            records::find(&self.categories, KIND, Operation::Update, request).await?;
        if let Some(title) = &update.title {
            self.ensure_unique_title(Operation::Update, title, Some(existing.id))
                .await?;
        }

        let category: Category = records::save(&self.categories, KIND, existing.id, update).await?;
        let payload = self.hydrate(&category).await?;
        Ok(respond::updated(KIND, category.id, payload))
    }

    async fn destroy(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let category: Category = records::remove(&self.categories, KIND, request).await?;
        Ok(respond::deleted(KIND, self.hydrate(&category).await?))
    }
}

#[async_trait]
impl Controller for CategoryController {
    fn kind(&self) -> Option<ResourceKind> {
        Some(KIND)
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
