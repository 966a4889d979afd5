use super::{records, respond, validate};
use crate::clients::{ActorClient, CommentClient, PostClient, UserClient};
use crate::dispatch::{
    ActionKind, Controller, DispatchError, DomainError, EnvelopeUpdate, Operation, Request,
    ResourceKind,
};
use crate::model::{Comment, CommentId, Post, User};
use async_trait::async_trait;
use serde_json::Value;

const KIND: ResourceKind = ResourceKind::Comment;

/// Comment actions. A comment may reply to another comment; payloads embed the
/// author and the post.
pub struct CommentController {
    comments: CommentClient,
    posts: PostClient,
    users: UserClient,
}

impl CommentController {
    pub fn new(comments: CommentClient, posts: PostClient, users: UserClient) -> Self {
        Self {
            comments,
            posts,
            users,
        }
    }

    async fn hydrate(&self, comment: &Comment) -> Result<Value, DispatchError> {
        let user = records::embed::<User, _>(&self.users, comment.user_id).await;
        let post = records::embed::<Post, _>(&self.posts, comment.post_id).await;
        Ok(records::with_related(
            records::to_payload(comment)?,
            vec![("user", user), ("post", post)],
        ))
    }

    async fn create(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let params = validate::comment_create(request.body())
            .map_err(|reason| DomainError::new(KIND, Operation::Create, reason))?;
        records::require_related::<Post, _>(&self.posts, KIND, ResourceKind::Post, params.post_id)
            .await?;
        records::require_related::<User, _>(&self.users, KIND, ResourceKind::User, params.user_id)
            .await?;
        if let Some(reply_id) = params.reply_id {
            records::require_related::<Comment, _>(&self.comments, KIND, KIND, reply_id).await?;
        }

        let comment = self.comments.create(params).await?;
        let payload = self.hydrate(&comment).await?;
        Ok(respond::created(KIND, comment.id, payload))
    }

    async fn list(&self) -> Result<EnvelopeUpdate, DispatchError> {
        let mut payload = Vec::new();
        for comment in self.comments.find_all().await? {
            payload.push(self.hydrate(&comment).await?);
        }
        Ok(respond::listed(KIND, Value::Array(payload)))
    }

    async fn show(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let comment: Comment =
            records::find(&self.comments, KIND, Operation::Retrieve, request).await?;
        Ok(respond::retrieved(KIND, self.hydrate(&comment).await?))
    }

    async fn update(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let update = validate::comment_update(request.body())
            .map_err(|reason| DomainError::new(KIND, Operation::Update, reason))?;
        let id: CommentId = records::record_id(KIND, Operation::Update, request)?;
        let comment: Comment = records::save(&self.comments, KIND, id, update).await?;
        let payload = self.hydrate(&comment).await?;
        Ok(respond::updated(KIND, comment.id, payload))
    }

    async fn destroy(&self, request: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        let comment: Comment = records::remove(&self.comments, KIND, request).await?;
        Ok(respond::deleted(KIND, self.hydrate(&comment).await?))
    }
}

#[async_trait]
impl Controller for CommentController {
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
