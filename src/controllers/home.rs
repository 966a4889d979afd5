use crate::dispatch::render::HOME_VIEW;
use crate::dispatch::{ActionKind, Controller, DispatchError, EnvelopeUpdate, Request};
use async_trait::async_trait;

/// Serves the empty resource name.
pub struct HomeController;

#[async_trait]
impl Controller for HomeController {
    async fn run(
        &self,
        action: ActionKind,
        _request: &Request,
    ) -> Result<EnvelopeUpdate, DispatchError> {
        match action {
            ActionKind::List => Ok(EnvelopeUpdate::success("Homepage!").template(HOME_VIEW)),
            _ => Err(DispatchError::MethodNotAllowed),
        }
    }
}
