//! # Rendering
//!
//! Serializes a finished [`Envelope`] in one of two modes. Data mode writes the
//! envelope as JSON with its own status code. Markup mode either redirects or renders
//! a named template with the envelope as context.
//!
//! Templates are plain text with `{{ path }}` placeholders resolved against the
//! data-mode body (`statusCode`, `message`, `payload.*`). Every substituted value is
//! HTML-escaped. A built-in set is registered for every resource, and a directory of
//! `<Name>.html` files can override or extend it.

use crate::dispatch::envelope::{status, Envelope};
use crate::dispatch::resource::ResourceKind;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const HOME_VIEW: &str = "HomeView";
pub const ERROR_VIEW: &str = "ErrorView";
pub const MESSAGE_VIEW: &str = "MessageView";

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";

/// How a finished envelope is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Data,
    Markup,
}

/// A serialized response ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Rendered {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Named templates for markup mode.
#[derive(Debug, Clone)]
pub struct Templates {
    entries: HashMap<String, String>,
}

impl Default for Templates {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Templates {
    /// The built-in views: home, error, message, and four views per resource.
    pub fn builtin() -> Self {
        let mut templates = Self {
            entries: HashMap::new(),
        };
        templates.insert(
            HOME_VIEW,
            layout(
                "{{ message }}",
                &ResourceKind::ALL
                    .iter()
                    .map(|kind| format!("<a href=\"/{}\">{}</a>", kind.path(), kind.plural()))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        );
        templates.insert(
            ERROR_VIEW,
            layout(
                "Error {{ statusCode }}",
                "<p class=\"error\">{{ message }}</p>\n<a href=\"/\">Home</a>",
            ),
        );
        templates.insert(MESSAGE_VIEW, layout("{{ message }}", "<p>{{ message }}</p>"));

        for kind in ResourceKind::ALL {
            templates.insert(
                kind.view("ListView"),
                layout(kind.plural(), "<p>{{ message }}</p>\n<pre>{{ payload }}</pre>"),
            );
            templates.insert(
                kind.view("ShowView"),
                layout(kind.name(), "<p>{{ message }}</p>\n<pre>{{ payload }}</pre>"),
            );
            templates.insert(
                kind.view("NewFormView"),
                layout(
                    &format!("New {}", kind.name()),
                    &form(&format!("/{}", kind.path()), None, kind.form_fields()),
                ),
            );
            templates.insert(
                kind.view("EditView"),
                layout(
                    &format!("Edit {}", kind.name()),
                    &form(
                        &format!("/{}/{{{{ payload.id }}}}", kind.path()),
                        Some("PUT"),
                        kind.form_fields(),
                    ),
                ),
            );
        }
        templates
    }

    /// Loads every `*.html` file under `dir`, recursively. The template name is the
    /// path relative to `dir` without the extension, so `User/ShowView.html`
    /// overrides `User/ShowView`.
    pub fn load_dir(mut self, dir: &Path) -> Result<Self, TemplateError> {
        let mut pending = vec![dir.to_path_buf()];
        while let Some(current) = pending.pop() {
            let entries = fs::read_dir(&current).map_err(|source| TemplateError::Io {
                path: current.clone(),
                source,
            })?;
            for entry in entries {
                let path = entry
                    .map_err(|source| TemplateError::Io {
                        path: current.clone(),
                        source,
                    })?
                    .path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }
                if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
                    continue;
                }
                let Some(name) = template_name(dir, &path) else {
                    continue;
                };
                let source = fs::read_to_string(&path).map_err(|source| TemplateError::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(template = %name, "Loaded template");
                self.entries.insert(name, source);
            }
        }
        Ok(self)
    }

    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.entries.insert(name.into(), source.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Renders `name`, falling back to the message view for unknown names.
    pub fn render(&self, name: &str, context: &Value) -> String {
        let source = match self.get(name) {
            Some(source) => source,
            None => {
                warn!(template = name, "Unknown template, using {MESSAGE_VIEW}");
                self.get(MESSAGE_VIEW).unwrap_or("{{ message }}")
            }
        };
        interpolate(source, context)
    }
}

impl Envelope {
    /// Serializes the envelope in the given mode.
    pub fn render(&self, mode: RenderMode, templates: &Templates) -> Rendered {
        match mode {
            RenderMode::Data => Rendered {
                status: self.status_code(),
                headers: vec![("Content-Type".to_string(), JSON.to_string())],
                body: self.to_data().to_string(),
            },
            RenderMode::Markup => self.render_markup(templates),
        }
    }

    fn render_markup(&self, templates: &Templates) -> Rendered {
        if !self.is_failure() {
            if let Some(target) = self.redirect_target() {
                return Rendered {
                    status: status::FOUND,
                    headers: vec![("Location".to_string(), target.to_string())],
                    body: String::new(),
                };
            }
        }

        let name = if self.is_failure() {
            ERROR_VIEW
        } else {
            self.template_name().unwrap_or(MESSAGE_VIEW)
        };
        Rendered {
            status: self.status_code(),
            headers: vec![("Content-Type".to_string(), HTML.to_string())],
            body: templates.render(name, &self.to_data()),
        }
    }
}

fn template_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<&str> = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    )
}

fn form(action: &str, method_override: Option<&str>, fields: &[&str]) -> String {
    let mut html = format!("<form method=\"post\" action=\"{action}\">\n");
    if let Some(method) = method_override {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"_method\" value=\"{method}\">\n"
        ));
    }
    for field in fields {
        html.push_str(&format!(
            "<label>{field} <input name=\"{field}\"></label>\n"
        ));
    }
    html.push_str("<button type=\"submit\">Save</button>\n</form>");
    html
}

/// Replaces each `{{ path }}` with the escaped value found at `path`. Missing paths
/// render empty; an unclosed `{{` is copied through as-is.
pub fn interpolate(source: &str, context: &Value) -> String {
    let mut output = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };
        if let Some(value) = lookup(context, after[..end].trim()) {
            output.push_str(&escape_html(&display(value)));
        }
        rest = &after[end + 2..];
    }
    output.push_str(rest);
    output
}

fn lookup<'a>(context: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(context, |value, key| match value {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::envelope::EnvelopeUpdate;
    use serde_json::json;

    fn envelope(update: EnvelopeUpdate) -> Envelope {
        let mut envelope = Envelope::new();
        envelope.set_response(update);
        envelope
    }

    #[test]
    fn test_interpolation_paths_and_escaping() {
        let context = json!({
            "message": "<b>hi</b>",
            "payload": {"id": 4, "tags": ["a", "b"], "gone": null}
        });
        assert_eq!(
            interpolate("{{ message }} #{{payload.id}} {{ payload.tags.1 }}", &context),
            "&lt;b&gt;hi&lt;/b&gt; #4 b"
        );
        assert_eq!(interpolate("[{{ payload.gone }}{{ nope.x }}]", &context), "[]");
        assert_eq!(interpolate("open {{ message", &context), "open {{ message");
    }

    #[test]
    fn test_data_mode_uses_envelope_status() {
        let rendered = envelope(EnvelopeUpdate::new().status(405).message("Invalid request method!"))
            .render(RenderMode::Data, &Templates::builtin());
        assert_eq!(rendered.status, 405);
        assert_eq!(rendered.header("content-type"), Some(JSON));
        let body: Value = serde_json::from_str(&rendered.body).unwrap();
        assert_eq!(
            body,
            json!({"statusCode": 405, "message": "Invalid request method!", "payload": {}})
        );
    }

    #[test]
    fn test_markup_redirects_on_success() {
        let rendered = envelope(
            EnvelopeUpdate::success("User saved successfully!")
                .redirect("/user/1")
                .template("User/ShowView"),
        )
        .render(RenderMode::Markup, &Templates::builtin());
        assert_eq!(rendered.status, 302);
        assert_eq!(rendered.header("Location"), Some("/user/1"));
        assert!(rendered.body.is_empty());
    }

    #[test]
    fn test_markup_failure_uses_error_view() {
        let rendered = envelope(
            EnvelopeUpdate::new()
                .status(400)
                .message("Cannot create Post: Missing type.")
                .redirect("/post/1"),
        )
        .render(RenderMode::Markup, &Templates::builtin());
        assert_eq!(rendered.status, 400);
        assert!(rendered.body.contains("Error 400"));
        assert!(rendered.body.contains("Cannot create Post: Missing type."));
    }

    #[test]
    fn test_markup_edit_form_action() {
        let rendered = envelope(
            EnvelopeUpdate::success("Edit Category")
                .payload(json!({"id": "3"}))
                .template("Category/EditView"),
        )
        .render(RenderMode::Markup, &Templates::builtin());
        assert_eq!(rendered.status, 200);
        assert!(rendered.body.contains("action=\"/category/3\""));
        assert!(rendered.body.contains("value=\"PUT\""));
    }

    #[test]
    fn test_unknown_template_falls_back_to_message_view() {
        let rendered = envelope(EnvelopeUpdate::success("plain").template("Nope/View"))
            .render(RenderMode::Markup, &Templates::builtin());
        assert!(rendered.body.contains("<p>plain</p>"));
    }

    #[test]
    fn test_directory_overrides_builtins() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("User")).unwrap();
        fs::write(dir.path().join("User/ShowView.html"), "user: {{ payload.username }}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let templates = Templates::builtin().load_dir(dir.path()).unwrap();
        assert_eq!(templates.get("User/ShowView"), Some("user: {{ payload.username }}"));
        assert!(templates.get("notes").is_none());
        assert!(templates.get(HOME_VIEW).is_some());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let result = Templates::builtin().load_dir(&missing);
        assert!(matches!(result, Err(TemplateError::Io { .. })));
    }
}
