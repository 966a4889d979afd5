//! Body validation for each resource.
//!
//! Checks here are purely about the shape of the submitted fields: presence, in a
//! fixed order, and whether identifiers and enumerations parse. Whether referenced
//! records exist is checked by the controllers against the store.

use crate::dispatch::{BodyParameters, Reason, ResourceKind};
use crate::model::{
    CategoryCreate, CategoryUpdate, CommentCreate, CommentUpdate, PokemonCreate, PokemonUpdate,
    PostCreate, PostType, PostUpdate, UserCreate, UserUpdate,
};
use std::str::FromStr;

/// A field that must be present and non-blank.
pub fn required(body: &BodyParameters, field: &'static str) -> Result<String, Reason> {
    body.filled(field).ok_or(Reason::Missing(field))
}

/// Parses a submitted identifier. An identifier that can't be parsed names a record
/// that can't exist.
pub fn reference<I: FromStr>(raw: &str, resource: ResourceKind) -> Result<I, Reason> {
    raw.trim()
        .parse()
        .map_err(|_| Reason::does_not_exist(resource, raw))
}

/// Rejects a non-blank value for a field that is fixed once the record exists.
fn unchanged(body: &BodyParameters, fixed: &[&'static str]) -> Result<(), Reason> {
    match fixed.iter().find(|field| body.filled(field).is_some()) {
        Some(field) => Err(Reason::Immutable(*field)),
        None => Ok(()),
    }
}

fn at_least_one(provided: &[bool]) -> Result<(), Reason> {
    if provided.iter().any(|p| *p) {
        Ok(())
    } else {
        Err(Reason::NoUpdateParameters)
    }
}

pub fn user_create(body: &BodyParameters) -> Result<UserCreate, Reason> {
    let username = required(body, "username")?;
    let email = required(body, "email")?;
    let password = required(body, "password")?;
    Ok(UserCreate {
        username,
        email,
        password,
        avatar: body.filled("avatar"),
    })
}

pub fn user_update(body: &BodyParameters) -> Result<UserUpdate, Reason> {
    let update = UserUpdate {
        username: body.filled("username"),
        email: body.filled("email"),
        password: body.filled("password"),
        avatar: body.filled("avatar"),
    };
    at_least_one(&[
        update.username.is_some(),
        update.email.is_some(),
        update.password.is_some(),
        update.avatar.is_some(),
    ])?;
    Ok(update)
}

pub fn category_create(body: &BodyParameters) -> Result<CategoryCreate, Reason> {
    let user_id = required(body, "userId")?;
    let title = required(body, "title")?;
    let description = required(body, "description")?;
    Ok(CategoryCreate {
        user_id: reference(&user_id, ResourceKind::User)?,
        title,
        description,
    })
}

pub fn category_update(body: &BodyParameters) -> Result<CategoryUpdate, Reason> {
    unchanged(body, &["userId"])?;
    let update = CategoryUpdate {
        title: body.filled("title"),
        description: body.filled("description"),
    };
    at_least_one(&[update.title.is_some(), update.description.is_some()])?;
    Ok(update)
}

pub fn post_create(body: &BodyParameters) -> Result<PostCreate, Reason> {
    let user_id = required(body, "userId")?;
    let category_id = required(body, "categoryId")?;
    let title = required(body, "title")?;
    let kind = required(body, "type")?;
    let content = required(body, "content")?;
    Ok(PostCreate {
        user_id: reference(&user_id, ResourceKind::User)?,
        category_id: reference(&category_id, ResourceKind::Category)?,
        title,
        kind: PostType::parse(kind.trim()).ok_or(Reason::Invalid("type"))?,
        content,
    })
}

pub fn post_update(body: &BodyParameters) -> Result<PostUpdate, Reason> {
    unchanged(body, &["userId", "categoryId", "type"])?;
    let update = PostUpdate {
        title: body.filled("title"),
        content: body.filled("content"),
    };
    at_least_one(&[update.title.is_some(), update.content.is_some()])?;
    Ok(update)
}

pub fn comment_create(body: &BodyParameters) -> Result<CommentCreate, Reason> {
    let post_id = required(body, "postId")?;
    let user_id = required(body, "userId")?;
    let content = required(body, "content")?;
    let reply_id = body
        .filled("replyId")
        .map(|raw| reference(&raw, ResourceKind::Comment))
        .transpose()?;
    Ok(CommentCreate {
        post_id: reference(&post_id, ResourceKind::Post)?,
        user_id: reference(&user_id, ResourceKind::User)?,
        reply_id,
        content,
    })
}

pub fn comment_update(body: &BodyParameters) -> Result<CommentUpdate, Reason> {
    unchanged(body, &["postId", "userId", "replyId"])?;
    let update = CommentUpdate {
        content: body.filled("content"),
    };
    at_least_one(&[update.content.is_some()])?;
    Ok(update)
}

pub fn pokemon_create(body: &BodyParameters) -> Result<PokemonCreate, Reason> {
    let name = required(body, "name")?;
    let kind = required(body, "type")?;
    Ok(PokemonCreate { name, kind })
}

pub fn pokemon_update(body: &BodyParameters) -> Result<PokemonUpdate, Reason> {
    let update = PokemonUpdate {
        name: body.filled("name"),
        kind: body.filled("type"),
    };
    at_least_one(&[update.name.is_some(), update.kind.is_some()])?;
    Ok(update)
}
