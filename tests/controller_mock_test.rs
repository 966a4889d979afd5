use resource_dispatch::clients::{CategoryClient, PostClient, UserClient};
use resource_dispatch::controllers::{HomeController, PostController};
use resource_dispatch::dispatch::{Envelope, Request, Router};
use resource_dispatch::framework::{mock::MockClient, FrameworkError};
use resource_dispatch::model::{Category, CategoryId, Post, User, UserId};
use serde_json::{json, Value};

/// Real Post store, mocked User and Category stores, routed like production.
///
/// Creating a post needs both related records to exist; the payload afterwards
/// embeds them again, and a failure during that second lookup only blanks the
/// embedded value.
#[tokio::test]
async fn test_post_store_with_mocked_owners() {
    let mut user_mock = MockClient::<User>::new();
    let mut category_mock = MockClient::<Category>::new();

    let ash = User {
        id: UserId(1),
        username: "ash".to_string(),
        email: "ash@x.com".to_string(),
        password: "pikachu1".to_string(),
        avatar: None,
        timestamps: Default::default(),
    };
    let sightings = Category {
        id: CategoryId(1),
        user_id: UserId(1),
        title: "Sightings".to_string(),
        description: "Wild encounters".to_string(),
        timestamps: Default::default(),
    };

    // Existence checks during create.
    user_mock.expect_get(UserId(1)).return_ok(Some(ash));
    category_mock.expect_get(CategoryId(1)).return_ok(Some(sightings));
    // Payload hydration after the store write.
    user_mock
        .expect_get(UserId(1))
        .return_err(FrameworkError::ActorDropped);
    category_mock
        .expect_get(CategoryId(1))
        .return_err(FrameworkError::ActorClosed);

    let (post_actor, post_client) = resource_dispatch::post_actor::new(8);
    let actor_handle = tokio::spawn(post_actor.run());

    let router = Router::new(HomeController).route(
        "post",
        PostController::new(
            post_client.clone(),
            UserClient::new(user_mock.client()),
            CategoryClient::new(category_mock.client()),
        ),
    );

    let request = Request::parse(
        "POST",
        "/post",
        json!({"userId": "1", "categoryId": "1", "title": "Pikachu", "type": "Text", "content": "Route 1"}),
    );
    let envelope = router.dispatch(request, Envelope::new()).await;

    assert_eq!(envelope.status_code(), 200, "{}", envelope.message());
    assert_eq!(envelope.message(), "Post saved successfully!");
    assert_eq!(envelope.payload()["title"], json!("Pikachu"));
    assert_eq!(envelope.payload()["user"], Value::Null);
    assert_eq!(envelope.payload()["category"], Value::Null);

    user_mock.verify();
    category_mock.verify();

    drop(router);
    drop(post_client);
    actor_handle.await.expect("Post actor failed");
}

/// A failing primary lookup is never swallowed.
#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let mut post_mock = MockClient::<Post>::new();
    post_mock
        .expect_list()
        .return_err(FrameworkError::ActorClosed);
    let user_mock = MockClient::<User>::new();
    let category_mock = MockClient::<Category>::new();

    let router = Router::new(HomeController).route(
        "post",
        PostController::new(
            PostClient::new(post_mock.client()),
            UserClient::new(user_mock.client()),
            CategoryClient::new(category_mock.client()),
        ),
    );

    let envelope = router
        .dispatch(Request::parse("GET", "/post", json!({})), Envelope::new())
        .await;
    assert_eq!(envelope.status_code(), 500);
    assert_eq!(envelope.message(), "Internal server error!");
    assert_eq!(envelope.payload(), &json!({}));

    post_mock.verify();
}
