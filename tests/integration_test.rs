use resource_dispatch::clients::actor_client::ActorClient;
use resource_dispatch::dispatch::{Envelope, RenderMode};
use resource_dispatch::lifecycle::{AppConfig, AppSystem};
use resource_dispatch::model::PostId;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::task::JoinSet;

fn system() -> AppSystem {
    AppSystem::new(&AppConfig::default()).expect("Failed to start system")
}

async fn seed_user(system: &AppSystem) {
    let envelope = system
        .handle(
            "POST",
            "/user",
            json!({"username": "Ash", "email": "ash@x.com", "password": "pikachu1"}),
            None,
        )
        .await;
    assert_eq!(envelope.status_code(), 200, "{}", envelope.message());
}

async fn seed_category(system: &AppSystem) {
    let envelope = system
        .handle(
            "POST",
            "/category",
            json!({"userId": "1", "title": "Sightings", "description": "Wild encounters"}),
            None,
        )
        .await;
    assert_eq!(envelope.status_code(), 200, "{}", envelope.message());
}

async fn seed_post(system: &AppSystem, kind: &str) -> Envelope {
    system
        .handle(
            "POST",
            "/post",
            json!({"userId": "1", "categoryId": "1", "title": "Pikachu", "type": kind, "content": "Route 1"}),
            None,
        )
        .await
}

/// POST /user creates the record and answers with what was submitted.
#[tokio::test]
async fn test_create_user() {
    let system = system();
    let envelope = system
        .handle(
            "POST",
            "/user",
            json!({"username": "Ash", "email": "ash@x.com", "password": "pikachu1"}),
            None,
        )
        .await;

    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.message(), "User saved successfully!");
    assert_eq!(envelope.payload()["username"], json!("Ash"));
    assert_eq!(envelope.payload()["createdAt"], Value::Null);
    assert_eq!(envelope.payload().get("password"), None);
    assert_eq!(envelope.redirect_target(), Some("/user/1"));

    // The stored copy carries the creation time and nothing else.
    let envelope = system.handle("GET", "/user/1", json!({}), None).await;
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.message(), "User was retrieved successfully!");
    assert_eq!(envelope.payload()["username"], json!("Ash"));
    assert_eq!(envelope.payload()["email"], json!("ash@x.com"));
    assert!(envelope.payload()["createdAt"].is_string());
    assert_eq!(envelope.payload()["editedAt"], Value::Null);
    assert_eq!(envelope.payload()["deletedAt"], Value::Null);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_update_without_parameters() {
    let system = system();
    seed_user(&system).await;

    let envelope = system
        .handle("PUT", "/user/1", json!({"username": ""}), None)
        .await;
    assert_eq!(envelope.status_code(), 400);
    assert_eq!(
        envelope.message(),
        "Cannot update User: No update parameters were provided."
    );
    assert_eq!(envelope.payload(), &json!({}));

    // Checked before the identifier, so an unknown user reports the same thing.
    let envelope = system.handle("PUT", "/user/42", json!({}), None).await;
    assert_eq!(
        envelope.message(),
        "Cannot update User: No update parameters were provided."
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_update_stamps_edited_at() {
    let system = system();
    seed_user(&system).await;

    let envelope = system
        .handle("PUT", "/user/1", json!({"avatar": "pikachu.png"}), None)
        .await;
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.message(), "User updated successfully!");
    assert_eq!(envelope.payload()["avatar"], json!("pikachu.png"));
    assert!(envelope.payload()["editedAt"].is_string());
    assert_eq!(envelope.redirect_target(), Some("/user/1"));

    let envelope = system
        .handle("PUT", "/user/7", json!({"avatar": "x.png"}), None)
        .await;
    assert_eq!(envelope.status_code(), 400);
    assert_eq!(
        envelope.message(),
        "Cannot update User: User does not exist with ID 7."
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_update_reports_missing_record_before_clash() {
    let system = system();
    seed_user(&system).await;

    let envelope = system
        .handle("PUT", "/user/99", json!({"username": "Ash"}), None)
        .await;
    assert_eq!(envelope.status_code(), 400);
    assert_eq!(
        envelope.message(),
        "Cannot update User: User does not exist with ID 99."
    );

    seed_category(&system).await;
    let envelope = system
        .handle("PUT", "/category/7", json!({"title": "Sightings"}), None)
        .await;
    assert_eq!(
        envelope.message(),
        "Cannot update Category: Category does not exist with ID 7."
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_update_fields_outside_the_editable_set() {
    let system = system();
    seed_user(&system).await;
    seed_category(&system).await;
    seed_post(&system, "Text").await;

    let envelope = system
        .handle("PUT", "/post/1", json!({"title": "New title"}), None)
        .await;
    assert_eq!(envelope.status_code(), 200, "{}", envelope.message());
    assert_eq!(envelope.payload()["title"], json!("New title"));
    assert_eq!(envelope.payload()["content"], json!("Route 1"));

    let envelope = system
        .handle("PUT", "/user/1", json!({"password": "newpass"}), None)
        .await;
    assert_eq!(envelope.status_code(), 200, "{}", envelope.message());
    assert_eq!(envelope.payload().get("password"), None);

    let envelope = system
        .handle("PUT", "/category/1", json!({"userId": "5"}), None)
        .await;
    assert_eq!(envelope.status_code(), 400);
    assert_eq!(
        envelope.message(),
        "Cannot update Category: userId cannot be changed."
    );

    let envelope = system
        .handle("PUT", "/post/1", json!({"type": "URL"}), None)
        .await;
    assert_eq!(
        envelope.message(),
        "Cannot update Post: type cannot be changed."
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_edit_form_does_not_look_up_the_record() {
    let system = system();

    let envelope = system.handle("GET", "/category/1/edit", json!({}), None).await;
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.template_name(), Some("Category/EditView"));
    assert_eq!(envelope.payload(), &json!({"id": "1"}));

    let envelope = system.handle("GET", "/category/new", json!({}), None).await;
    assert_eq!(envelope.template_name(), Some("Category/NewFormView"));
    assert_eq!(envelope.payload(), &json!({}));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_destroy_is_a_soft_delete() {
    let system = system();
    seed_user(&system).await;
    seed_category(&system).await;
    for _ in 0..5 {
        let envelope = seed_post(&system, "Text").await;
        assert_eq!(envelope.status_code(), 200);
    }

    let envelope = system.handle("DELETE", "/post/5", json!({}), None).await;
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.message(), "Post deleted successfully!");
    assert_eq!(envelope.redirect_target(), Some("/post"));
    let deleted_at = envelope.payload()["deletedAt"].clone();
    assert!(deleted_at.is_string());

    let envelope = system.handle("GET", "/post/5", json!({}), None).await;
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.payload()["deletedAt"], deleted_at);

    // Deleting again keeps the first deletion time.
    let envelope = system.handle("DELETE", "/post/5", json!({}), None).await;
    assert_eq!(envelope.payload()["deletedAt"], deleted_at);

    let envelope = system.handle("DELETE", "/post/6", json!({}), None).await;
    assert_eq!(envelope.status_code(), 400);
    assert_eq!(
        envelope.message(),
        "Cannot delete Post: Post does not exist with ID 6."
    );

    let stored = system
        .post_client
        .find_by_id(PostId(5))
        .await
        .expect("Failed to get post")
        .expect("Post not found");
    assert!(stored.timestamps.is_deleted());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_create_post_without_type() {
    let system = system();
    let envelope = system
        .handle(
            "POST",
            "/post",
            json!({"userId": "1", "categoryId": "1", "title": "T", "content": "C"}),
            None,
        )
        .await;
    assert_eq!(envelope.status_code(), 400);
    assert_eq!(envelope.message(), "Cannot create Post: Missing type.");
    assert_eq!(envelope.payload(), &json!({}));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_show_unknown_pokemon() {
    let system = system();
    let envelope = system.handle("GET", "/pokemon/999", json!({}), None).await;
    assert_eq!(envelope.status_code(), 400);
    assert_eq!(
        envelope.message(),
        "Cannot retrieve Pokemon: Pokemon does not exist with ID 999."
    );

    let envelope = system.handle("GET", "/pokemon/pika", json!({}), None).await;
    assert_eq!(
        envelope.message(),
        "Cannot retrieve Pokemon: Pokemon does not exist with ID pika."
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_routing_failures() {
    let system = system();

    let rendered = system
        .dispatch("GET", "/trainer", json!({}), None, RenderMode::Data)
        .await;
    assert_eq!(rendered.status, 404);
    let body: Value = serde_json::from_str(&rendered.body).expect("Invalid JSON");
    assert_eq!(
        body,
        json!({"statusCode": 404, "message": "Invalid request path!", "payload": {}})
    );

    let envelope = system.handle("PATCH", "/pokemon/1", json!({}), None).await;
    assert_eq!(envelope.status_code(), 405);
    assert_eq!(envelope.message(), "Invalid request method!");

    let envelope = system.handle("POST", "/", json!({}), None).await;
    assert_eq!(envelope.status_code(), 405);

    let envelope = system.handle("GET", "/", json!({}), None).await;
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.message(), "Homepage!");

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_uniqueness_and_references() {
    let system = system();
    seed_user(&system).await;

    let envelope = system
        .handle(
            "POST",
            "/user",
            json!({"username": "Gary", "email": "ash@x.com", "password": "eevee"}),
            None,
        )
        .await;
    assert_eq!(envelope.message(), "Cannot create User: Email already exists.");

    let envelope = system
        .handle(
            "POST",
            "/category",
            json!({"userId": "9", "title": "Sightings", "description": "D"}),
            None,
        )
        .await;
    assert_eq!(
        envelope.message(),
        "Cannot create Category: User does not exist with ID 9."
    );

    seed_category(&system).await;
    let envelope = system
        .handle(
            "POST",
            "/category",
            json!({"userId": "1", "title": "Sightings", "description": "again"}),
            None,
        )
        .await;
    assert_eq!(envelope.message(), "Cannot create Category: Title already exists.");

    // The failed creates did not use up identifiers.
    let envelope = system
        .handle(
            "POST",
            "/category",
            json!({"userId": "1", "title": "Trades", "description": "D"}),
            None,
        )
        .await;
    assert_eq!(envelope.payload()["id"], json!(2));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_link_posts_are_read_only() {
    let system = system();
    seed_user(&system).await;
    seed_category(&system).await;
    assert_eq!(seed_post(&system, "URL").await.payload()["type"], json!("URL"));
    assert_eq!(seed_post(&system, "text").await.payload()["type"], json!("Text"));

    let envelope = system
        .handle("PUT", "/post/1", json!({"content": "https://example.com"}), None)
        .await;
    assert_eq!(envelope.status_code(), 400);
    assert_eq!(
        envelope.message(),
        "Cannot update Post: Only text posts can be edited."
    );

    let envelope = system
        .handle("PUT", "/post/2", json!({"content": "Route 2"}), None)
        .await;
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.payload()["content"], json!("Route 2"));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_payloads_embed_related_records() {
    let system = system();
    seed_user(&system).await;
    seed_category(&system).await;
    seed_post(&system, "Text").await;

    let envelope = system
        .handle(
            "POST",
            "/comment",
            json!({"postId": "1", "userId": "1", "content": "Nice find"}),
            None,
        )
        .await;
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.payload()["user"]["username"], json!("Ash"));
    assert_eq!(envelope.payload()["post"]["title"], json!("Pikachu"));
    assert_eq!(envelope.payload()["replyId"], Value::Null);

    let envelope = system
        .handle(
            "POST",
            "/comment",
            json!({"postId": "1", "userId": "1", "content": "Agreed", "replyId": "1"}),
            None,
        )
        .await;
    assert_eq!(envelope.payload()["replyId"], json!(1));

    let envelope = system.handle("GET", "/post", json!({}), None).await;
    assert_eq!(envelope.message(), "Posts were retrieved successfully!");
    assert_eq!(envelope.payload()[0]["category"]["title"], json!("Sightings"));
    assert_eq!(envelope.payload()[0]["user"]["id"], json!(1));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_list_is_in_id_order() {
    let system = system();
    for name in ["Pikachu", "Bulbasaur", "Charmander"] {
        system
            .handle("POST", "/pokemon", json!({"name": name, "type": "Any"}), None)
            .await;
    }

    let envelope = system.handle("GET", "/pokemon", json!({}), None).await;
    assert_eq!(envelope.message(), "Pokemon were retrieved successfully!");
    let names: Vec<&Value> = envelope
        .payload()
        .as_array()
        .expect("List payload is an array")
        .iter()
        .map(|pokemon| &pokemon["name"])
        .collect();
    assert_eq!(names, [&json!("Pikachu"), &json!("Bulbasaur"), &json!("Charmander")]);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_concurrent_dispatches() {
    let system = Arc::new(system());

    let mut tasks = JoinSet::new();
    for i in 0..20 {
        let system = Arc::clone(&system);
        tasks.spawn(async move {
            system
                .handle(
                    "POST",
                    "/pokemon",
                    json!({"name": format!("Pokemon {i}"), "type": "Normal"}),
                    None,
                )
                .await
        });
    }
    let envelopes = tasks.join_all().await;
    assert!(envelopes.iter().all(|e| e.status_code() == 200));

    let mut ids: Vec<u64> = envelopes
        .iter()
        .map(|e| e.payload()["id"].as_u64().expect("numeric id"))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());

    let system = match Arc::try_unwrap(system) {
        Ok(system) => system,
        Err(_) => panic!("System still shared"),
    };
    system.shutdown().await.expect("Shutdown failed");
}
