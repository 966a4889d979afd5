use resource_dispatch::dispatch::RenderMode;
use resource_dispatch::lifecycle::{setup_tracing, AppConfig, AppSystem};
use serde_json::{json, Value};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting dispatch demo");
    let system = AppSystem::new(&config).map_err(|e| e.to_string())?;
    let mode = system.render_mode();

    let steps: Vec<(&str, &str, Value)> = vec![
        ("GET", "/", json!({})),
        (
            "POST",
            "/user",
            json!({"username": "Ash", "email": "ash@x.com", "password": "pikachu1"}),
        ),
        ("PUT", "/user/1", json!({"username": ""})),
        (
            "POST",
            "/category",
            json!({"userId": "1", "title": "Sightings", "description": "Wild encounters"}),
        ),
        ("GET", "/category/1/edit", json!({})),
        (
            "POST",
            "/post",
            json!({"userId": "1", "categoryId": "1", "title": "Pikachu", "content": "Route 1"}),
        ),
        (
            "POST",
            "/post",
            json!({"userId": "1", "categoryId": "1", "title": "Pikachu", "type": "Text", "content": "Route 1"}),
        ),
        ("DELETE", "/post/1", json!({})),
        ("GET", "/post/1", json!({})),
        ("GET", "/pokemon/999", json!({})),
        ("GET", "/trainer", json!({})),
        ("PATCH", "/pokemon/1", json!({})),
    ];

    for (verb, path, body) in steps {
        let span = tracing::info_span!("demo", verb, path);
        let rendered = async { system.dispatch(verb, path, body, None, mode).await }
            .instrument(span)
            .await;
        info!(status = rendered.status, body = %rendered.body, "{verb} {path}");
    }

    let markup = system
        .dispatch("GET", "/user/1", json!({}), None, RenderMode::Markup)
        .await;
    info!(status = markup.status, "Markup render of /user/1:\n{}", markup.body);

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
