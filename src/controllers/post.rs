use super::{records, respond, validate};
use crate::clients::{ActorClient, CategoryClient, PostClient, UserClient};
use crate::dispatch::{
    ActionKind, Controller, DispatchError, DomainError, EnvelopeUpdate, Operation, Reason,
    Request, ResourceKind,
};
use crate::model::{Category, Post, User};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument};

const KIND: ResourceKind = ResourceKind::Post;

/// Post actions. Payloads embed the author and the category; link posts are
/// read-only once created.
pub struct PostController {
    posts: PostClient,
    users: UserClient,
    categories: CategoryClient,
}

impl PostController {
    pub fn new(posts: PostClient, users: UserClient, categories: CategoryClient) -> Self {
        Self {
            posts,
            users,
            categories,
        }
    }

    async fn hydrate(&self, post: &Post) -> Result<Value, DispatchError> {
        let user = records::embed::<User, _>(&self.users, post.user_id).await;
        let category = records::embed::<Category, _>(&self.categories, post.category_id).await;
        Ok(records::with_related(
            records::to_payload(post)?,
            vec![("user", user), ("category", category)],
        ))
    }

    #[instrument(skip_all)]
    async fn create(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let params = validate::post_create(request.body())
            .map_err(|reason| DomainError::new(KIND, Operation::Create, reason))?;
        records::require_related::<User, _>(&self.users, KIND, ResourceKind::User, params.user_id)
            .await?;
        records::require_related::<Category, _>(
            &self.categories,
            KIND,
            ResourceKind::Category,
            params.category_id,
        )
        .await?;

        let post = self.posts.create(params).await?;
        info!(post_id = %post.id, kind = %post.kind, "Post created");
        let payload = self.hydrate(&post).await?;
        Ok(respond::created(KIND, post.id, payload))
    }

    async fn list(&self) -> Result<EnvelopeUpdate, DispatchError> {
        let mut payload = Vec::new();
        for post in self.posts.find_all().await? {
            payload.push(self.hydrate(&post).await?);
        }
        Ok(respond::listed(KIND, Value::Array(payload)))
    }

    async fn show(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let post: Post = records::find(&self.posts, KIND, Operation::Retrieve, request).await?;
        Ok(respond::retrieved(KIND, self.hydrate(&post).await?))
    }

    async fn update(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let update = validate::post_update(request.body())
            .map_err(|reason| DomainError::new(KIND, Operation::Update, reason))?;
        let existing: Post = records::find(&self.posts, KIND, Operation::Update, request).await?;
        if !existing.is_editable() {
            return Err(DomainError::new(KIND, Operation::Update, Reason::NotEditable).into());
        }

        let post: Post = records::save(&self.posts, KIND, existing.id, update).await?;
        let payload = self.hydrate(&post).await?;
        Ok(respond::updated(KIND, post.id, payload))
    }

    async fn destroy(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let post: Post = records::remove(&self.posts, KIND, request).await?;
        Ok(respond::deleted(KIND, self.hydrate(&post).await?))
    }
}

#[async_trait]
impl Controller for PostController {
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

/// Exposed for controller tests elsewhere in the crate.
#[cfg(test)]
pub(crate) fn sample(id: u32, kind: crate::model::PostType) -> Post {
    use crate::framework::Timestamps;
    use crate::model::{CategoryId, PostId, UserId};

    Post {
        id: PostId(id),
        user_id: UserId(1),
        category_id: CategoryId(1),
        title: "Pikachu sightings".to_string(),
        kind,
        content: "https://example.com".to_string(),
        timestamps: Timestamps::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{PostId, PostType};
    use serde_json::json;

    struct Mocks {
        posts: MockClient<Post>,
        users: MockClient<User>,
        categories: MockClient<Category>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                posts: MockClient::new(),
                users: MockClient::new(),
                categories: MockClient::new(),
            }
        }

        fn controller(&self) -> PostController {
            PostController::new(
                PostClient::new(self.posts.client()),
                UserClient::new(self.users.client()),
                CategoryClient::new(self.categories.client()),
            )
        }

        fn verify(&self) {
            self.posts.verify();
            self.users.verify();
            self.categories.verify();
        }
    }

    #[tokio::test]
    async fn test_link_posts_cannot_be_edited() {
        let mut mocks = Mocks::new();
        mocks
            .posts
            .expect_get(PostId(2))
            .return_ok(Some(sample(2, PostType::Url)));
        let request = Request::parse("PUT", "/post/2", json!({"content": "new"}));

        let error = mocks
            .controller()
            .run(ActionKind::Update, &request)
            .await
            .unwrap_err();
        assert_eq!(error.status(), 400);
        assert_eq!(
            error.to_string(),
            "Cannot update Post: Only text posts can be edited."
        );
        mocks.verify();
    }

    #[tokio::test]
    async fn test_failed_owner_lookup_embeds_null() {
        let mut mocks = Mocks::new();
        mocks
            .posts
            .expect_get(PostId(1))
            .return_ok(Some(sample(1, PostType::Text)));
        mocks
            .users
            .expect_get(crate::model::UserId(1))
            .return_err(FrameworkError::ActorClosed);
        mocks
            .categories
            .expect_get(crate::model::CategoryId(1))
            .return_ok(None);
        let request = Request::parse("GET", "/post/1", json!({}));

        let update = mocks.controller().run(ActionKind::Show, &request).await.unwrap();
        let payload = update.payload.unwrap();
        assert_eq!(payload["id"], json!(1));
        assert_eq!(payload["user"], Value::Null);
        assert_eq!(payload["category"], Value::Null);
        mocks.verify();
    }

    #[tokio::test]
    async fn test_failed_primary_lookup_is_500() {
        let mut mocks = Mocks::new();
        mocks
            .posts
            .expect_get(PostId(1))
            .return_err(FrameworkError::ActorClosed);
        let request = Request::parse("GET", "/post/1", json!({}));

        let error = mocks
            .controller()
            .run(ActionKind::Show, &request)
            .await
            .unwrap_err();
        assert_eq!(error.status(), 500);
        assert_eq!(error.public_message(), "Internal server error!");
        mocks.verify();
    }

    #[tokio::test]
    async fn test_missing_author_rejects_create() {
        let mut mocks = Mocks::new();
        mocks.users.expect_get(crate::model::UserId(5)).return_ok(None);
        let request = Request::parse(
            "POST",
            "/post",
            json!({"userId": "5", "categoryId": "1", "title": "T", "type": "Text", "content": "C"}),
        );

        let error = mocks
            .controller()
            .run(ActionKind::Create, &request)
            .await
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot create Post: User does not exist with ID 5."
        );
        mocks.verify();
    }
}
