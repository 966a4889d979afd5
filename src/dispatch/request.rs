//! # Request Parsing
//!
//! Turns the raw `(verb, path, body)` triple into a [`Request`]. Parsing is purely
//! structural: the path is split on `/`, the first segment names the resource, and
//! everything after it is kept verbatim as header segments. Turning a segment into an
//! identifier is the job of the action that consumes it.

use serde_json::{Map, Value};
use std::fmt::{self, Display};

/// The request verb. Anything other than the four known verbs is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Other(String),
}

impl Verb {
    /// Parses a verb token exactly as given; no case folding.
    pub fn parse(token: &str) -> Self {
        match token {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
            Self::Other(token) => write!(f, "{token}"),
        }
    }
}

/// Body parameters as supplied by the bootstrapping layer.
///
/// Values are usually strings (form posts) but any JSON scalar is accepted and read
/// back as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyParameters(Map<String, Value>);

impl BodyParameters {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The field as text. `null`, arrays and objects read as absent.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// The field as text, only if it holds something other than whitespace.
    pub fn filled(&self, field: &str) -> Option<String> {
        self.text(field).filter(|value| !value.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Value> for BodyParameters {
    /// Objects become the parameter map; every other JSON value is an empty body.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for BodyParameters {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// A parsed inbound request. Immutable once parsed, apart from attaching a session
/// before it is dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    verb: Verb,
    resource: String,
    segments: Vec<String>,
    body: BodyParameters,
    session: Option<String>,
}

impl Request {
    /// Parses `(verb, path, body)`.
    ///
    /// `/user/7/edit` yields resource `user` and segments `["7", "edit"]`; `/` and the
    /// empty path yield the empty (home) resource. Trailing slashes, case and escapes
    /// are left alone.
    pub fn parse(verb: &str, path: &str, body: impl Into<BodyParameters>) -> Self {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let mut parts = trimmed.split('/').map(str::to_string);
        let resource = parts.next().unwrap_or_default();
        let segments = parts.collect();

        Self {
            verb: Verb::parse(verb),
            resource,
            segments,
            body: body.into(),
            session: None,
        }
    }

    /// Attaches the session identifier found by the cookie layer.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    pub fn verb(&self) -> &Verb {
        &self.verb
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    pub fn body(&self) -> &BodyParameters {
        &self.body
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}
