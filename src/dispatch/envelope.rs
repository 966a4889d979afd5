//! # Response Envelope
//!
//! The mutable record every action writes into: status, message, payload, and the
//! markup-only redirect and template. Actions never touch the envelope directly; they
//! return an [`EnvelopeUpdate`] and the router merges it with
//! [`Envelope::set_response`].

use serde::Serialize;
use serde_json::{json, Value};

/// Status codes the dispatcher emits.
pub mod status {
    pub const OK: u16 = 200;
    pub const FOUND: u16 = 302;
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const NOT_FOUND: u16 = 404;
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Outbound response state for one request.
///
/// Serializes to the data-mode body `{statusCode, message, payload}`; the redirect
/// and template are only read by the markup renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    status_code: u16,
    message: String,
    payload: Value,
    #[serde(skip)]
    redirect_target: Option<String>,
    #[serde(skip)]
    template_name: Option<String>,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            status_code: status::OK,
            message: String::new(),
            payload: json!({}),
            redirect_target: None,
            template_name: None,
        }
    }
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a partial update. Fields the update leaves unset keep their value.
    pub fn set_response(&mut self, update: EnvelopeUpdate) {
        if let Some(status_code) = update.status_code {
            self.status_code = status_code;
        }
        if let Some(message) = update.message {
            self.message = message;
        }
        if let Some(payload) = update.payload {
            self.payload = payload;
        }
        if let Some(redirect) = update.redirect_target {
            self.redirect_target = Some(redirect);
        }
        if let Some(template) = update.template_name {
            self.template_name = Some(template);
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_target.as_deref()
    }

    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    pub fn is_failure(&self) -> bool {
        self.status_code >= status::BAD_REQUEST
    }

    /// The data-mode body.
    pub fn to_data(&self) -> Value {
        json!({
            "statusCode": self.status_code,
            "message": self.message,
            "payload": self.payload,
        })
    }
}

/// A partial write to an [`Envelope`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopeUpdate {
    pub status_code: Option<u16>,
    pub message: Option<String>,
    pub payload: Option<Value>,
    pub redirect_target: Option<String>,
    pub template_name: Option<String>,
}

impl EnvelopeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// A 200 with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new().status(status::OK).message(message)
    }

    pub fn status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect_target = Some(target.into());
        self
    }

    pub fn template(mut self, name: impl Into<String>) -> Self {
        self.template_name = Some(name.into());
        self
    }
}
