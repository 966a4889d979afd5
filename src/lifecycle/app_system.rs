use crate::clients::{CategoryClient, CommentClient, PokemonClient, PostClient, UserClient};
use crate::controllers::{
    CategoryController, CommentController, HomeController, PokemonController, PostController,
    UserController,
};
use crate::dispatch::{
    BodyParameters, Envelope, RenderMode, Rendered, Request, ResourceKind, Router, Templates,
};
use crate::lifecycle::config::{AppConfig, ConfigError};
use tracing::{error, info};

/// The runtime orchestrator: store actors, their clients, the router, and the
/// templates used in markup mode.
///
/// `AppSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping one store actor per entity kind
/// - **Dependency Wiring**: Handing each controller the clients it needs
///   (e.g. the post controller also reads users and categories)
///
/// # Example
///
/// ```ignore
/// let system = AppSystem::new(&AppConfig::default())?;
///
/// let rendered = system
///     .dispatch("POST", "/pokemon", json!({"name": "Pikachu", "type": "Electric"}), None, RenderMode::Data)
///     .await;
/// assert_eq!(rendered.status, 200);
///
/// system.shutdown().await?;
/// ```
pub struct AppSystem {
    pub user_client: UserClient,
    pub category_client: CategoryClient,
    pub post_client: PostClient,
    pub comment_client: CommentClient,
    pub pokemon_client: PokemonClient,

    router: Router,
    templates: Templates,
    render_mode: RenderMode,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AppSystem {
    /// Spawns the store actors and builds the router.
    ///
    /// Must be called inside a Tokio runtime. Fails only if the configured template
    /// directory can't be read.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let templates = match &config.templates_dir {
            Some(dir) => Templates::builtin().load_dir(dir)?,
            None => Templates::builtin(),
        };

        let (user_actor, user_client) = crate::user_actor::new(config.buffer_size);
        let (category_actor, category_client) = crate::category_actor::new(config.buffer_size);
        let (post_actor, post_client) = crate::post_actor::new(config.buffer_size);
        let (comment_actor, comment_client) = crate::comment_actor::new(config.buffer_size);
        let (pokemon_actor, pokemon_client) = crate::pokemon_actor::new(config.buffer_size);

        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(category_actor.run()),
            tokio::spawn(post_actor.run()),
            tokio::spawn(comment_actor.run()),
            tokio::spawn(pokemon_actor.run()),
        ];

        let router = Router::new(HomeController)
            .route(
                ResourceKind::User.path(),
                UserController::new(user_client.clone()),
            )
            .route(
                ResourceKind::Category.path(),
                CategoryController::new(category_client.clone(), user_client.clone()),
            )
            .route(
                ResourceKind::Post.path(),
                PostController::new(
                    post_client.clone(),
                    user_client.clone(),
                    category_client.clone(),
                ),
            )
            .route(
                ResourceKind::Comment.path(),
                CommentController::new(
                    comment_client.clone(),
                    post_client.clone(),
                    user_client.clone(),
                ),
            )
            .route(
                ResourceKind::Pokemon.path(),
                PokemonController::new(pokemon_client.clone()),
            )
            .require_session(config.require_session);

        info!(resources = ?router.resources(), mode = ?config.render_mode, "System started");

        Ok(Self {
            user_client,
            category_client,
            post_client,
            comment_client,
            pokemon_client,
            router,
            templates,
            render_mode: config.render_mode,
            handles,
        })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// The render mode from the config, for callers that don't pick one per request.
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Parses and dispatches a request, returning the finished envelope.
    pub async fn handle(
        &self,
        verb: &str,
        path: &str,
        body: impl Into<BodyParameters>,
        session: Option<&str>,
    ) -> Envelope {
        let mut request = Request::parse(verb, path, body);
        if let Some(session) = session {
            request = request.with_session(session);
        }
        self.router.dispatch(request, Envelope::new()).await
    }

    /// One full cycle: parse, dispatch, render.
    pub async fn dispatch(
        &self,
        verb: &str,
        path: &str,
        body: impl Into<BodyParameters>,
        session: Option<&str>,
        mode: RenderMode,
    ) -> Rendered {
        self.handle(verb, path, body, session)
            .await
            .render(mode, &self.templates)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the router and clients closes every actor channel; each actor then
    /// leaves its loop and its task finishes.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.router);
        drop(self.user_client);
        drop(self.category_client);
        drop(self.post_client);
        drop(self.comment_client);
        drop(self.pokemon_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
