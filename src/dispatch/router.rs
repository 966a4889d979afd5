//! # Router
//!
//! Holds the static map from resource name to controller and drives one request
//! through it: resolve, select, run, merge the result (or the translated failure)
//! into the envelope.
//!
//! Each action runs on its own task so that a panicking action becomes a 500 for that
//! request instead of taking the dispatcher down with it.

use crate::dispatch::envelope::{Envelope, EnvelopeUpdate};
use crate::dispatch::error::{translate, DispatchError, DomainError, Reason};
use crate::dispatch::request::Request;
use crate::dispatch::resource::ResourceKind;
use crate::dispatch::selector::{self, ActionKind};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// A request handler for one resource name.
#[async_trait]
pub trait Controller: Send + Sync + 'static {
    /// The resource kind this controller serves, if any.
    fn kind(&self) -> Option<ResourceKind> {
        None
    }

    /// Picks the action to run. Controllers only override this to narrow the
    /// standard table.
    fn select_action(&self, request: &Request) -> ActionKind {
        selector::select(request.verb(), request.segments())
    }

    /// Whether `action` needs a logged-in session when sessions are enforced.
    fn requires_session(&self, action: ActionKind) -> bool {
        action.is_write()
    }

    /// Runs the action and returns what to write into the envelope.
    async fn run(
        &self,
        action: ActionKind,
        request: &Request,
    ) -> Result<EnvelopeUpdate, DispatchError>;
}

/// Answers every request for an unknown resource with `404 Invalid request path!`.
pub struct InvalidPathController;

#[async_trait]
impl Controller for InvalidPathController {
    async fn run(&self, _: ActionKind, _: &Request) -> Result<EnvelopeUpdate, DispatchError> {
        Err(DispatchError::InvalidPath)
    }
}

/// Maps resource names to controllers. Built once at startup, read-only afterwards.
pub struct Router {
    home: Arc<dyn Controller>,
    controllers: HashMap<String, Arc<dyn Controller>>,
    fallback: Arc<dyn Controller>,
    require_session: bool,
}

impl Router {
    /// A router whose empty resource name goes to `home`.
    pub fn new(home: impl Controller) -> Self {
        Self {
            home: Arc::new(home),
            controllers: HashMap::new(),
            fallback: Arc::new(InvalidPathController),
            require_session: false,
        }
    }

    /// Registers `controller` under `name`. Names are matched exactly.
    pub fn route(mut self, name: impl Into<String>, controller: impl Controller) -> Self {
        self.controllers.insert(name.into(), Arc::new(controller));
        self
    }

    /// Turns the session gate on or off.
    pub fn require_session(mut self, required: bool) -> Self {
        self.require_session = required;
        self
    }

    pub fn resources(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.controllers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn resolve(&self, resource: &str) -> Arc<dyn Controller> {
        if resource.is_empty() {
            return Arc::clone(&self.home);
        }
        match self.controllers.get(resource) {
            Some(controller) => Arc::clone(controller),
            None => {
                debug!(resource, "No controller registered");
                Arc::clone(&self.fallback)
            }
        }
    }

    fn check_session(
        &self,
        controller: &dyn Controller,
        action: ActionKind,
        request: &Request,
    ) -> Result<(), DispatchError> {
        if !self.require_session || request.has_session() || !controller.requires_session(action)
        {
            return Ok(());
        }
        match controller.kind() {
            Some(kind) => Err(DomainError::new(kind, action.operation(), Reason::Unauthorized).into()),
            None => Ok(()),
        }
    }

    /// Dispatches one request, writing the outcome into `envelope`.
    ///
    /// Never fails: every error is translated into a status and message.
    #[instrument(skip_all, fields(verb = %request.verb(), resource = request.resource()))]
    pub async fn dispatch(&self, request: Request, mut envelope: Envelope) -> Envelope {
        let controller = self.resolve(request.resource());
        let action = controller.select_action(&request);
        debug!(?action, "Action selected");

        let outcome = match self.check_session(controller.as_ref(), action, &request) {
            Ok(()) => {
                let task = tokio::spawn(async move { controller.run(action, &request).await });
                match task.await {
                    Ok(result) => result,
                    Err(join_error) => {
                        error!(error = %join_error, "Action task failed");
                        Err(DispatchError::Panicked(join_error.to_string()))
                    }
                }
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(update) => envelope.set_response(update),
            Err(e) => {
                if e.is_client_error() {
                    warn!(error = %e, "Request rejected");
                } else {
                    error!(error = %e, "Request failed");
                }
                envelope.set_response(translate(&e));
            }
        }
        info!(status = envelope.status_code(), "Dispatched");
        envelope
    }
}
