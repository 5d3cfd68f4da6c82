//! In-memory message catalog.
//!
//! # Responsibilities
//! - Hold the message templates of one language, keyed by message ID
//! - Render `{{.name}}` placeholders from template data
//!
//! # Design Decisions
//! - Catalogs are built in code; reading bundle files is left to the application
//! - A placeholder with no matching value renders as `<no value>`
//! - Anything other than a `.name` action is a template error, not a silent pass-through

use std::collections::HashMap;

use serde_json::Value;

use crate::i18n::{LocaleParams, Localize, LocalizeError};

/// Text written for a placeholder that has no value.
pub const NO_VALUE: &str = "<no value>";

const ACTION_OPEN: &str = "{{";
const ACTION_CLOSE: &str = "}}";

/// Message templates for a single language.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    language: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog for the given language tag.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            messages: HashMap::new(),
        }
    }

    /// Add a message and return the catalog for chaining.
    pub fn with_message(mut self, id: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(id, template);
        self
    }

    /// Add or replace a message.
    pub fn insert(&mut self, id: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(id.into(), template.into());
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.messages.contains_key(id)
    }
}

impl<K, V> Extend<(K, V)> for MessageCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (id, template) in iter {
            self.insert(id, template);
        }
    }
}

impl Localize for MessageCatalog {
    fn localize(
        &self,
        message_id: &str,
        template_data: Option<&LocaleParams>,
    ) -> Result<String, LocalizeError> {
        let template = self
            .messages
            .get(message_id)
            .ok_or_else(|| LocalizeError::MessageNotFound {
                id: message_id.to_string(),
                language: self.language.clone(),
            })?;

        if !template.contains(ACTION_OPEN) {
            return Ok(template.clone());
        }

        render(template, template_data).map_err(|reason| LocalizeError::Template {
            id: message_id.to_string(),
            reason,
        })
    }
}

/// Substitute every `{{.name}}` action in `template`.
fn render(template: &str, data: Option<&LocaleParams>) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(ACTION_OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + ACTION_OPEN.len()..];
        let end = after
            .find(ACTION_CLOSE)
            .ok_or_else(|| format!("unclosed action at byte {}", template.len() - rest.len() + start))?;

        let name = field_name(after[..end].trim())?;
        match data.and_then(|d| d.get(name)) {
            Some(value) => push_value(&mut out, value),
            None => out.push_str(NO_VALUE),
        }

        rest = &after[end + ACTION_CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

fn field_name(action: &str) -> Result<&str, String> {
    action
        .strip_prefix('.')
        .filter(|name| !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_'))
        .ok_or_else(|| format!("unsupported action \"{action}\""))
}

fn push_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Null => out.push_str(NO_VALUE),
        other => out.push_str(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, Value)]) -> LocaleParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_plain_message() {
        let catalog = MessageCatalog::new("en").with_message("errors.bad_request", "Bad request");
        assert_eq!(
            catalog.localize("errors.bad_request", None).unwrap(),
            "Bad request"
        );
    }

    #[test]
    fn test_missing_message() {
        let catalog = MessageCatalog::new("th");
        let err = catalog.localize("errors.not_found", None).unwrap_err();
        assert_eq!(
            err,
            LocalizeError::MessageNotFound {
                id: "errors.not_found".into(),
                language: "th".into(),
            }
        );
    }

    #[test]
    fn test_placeholders() {
        let catalog = MessageCatalog::new("en")
            .with_message("validation.field.required", "{{.field}} is required")
            .with_message(
                "validation.username.length",
                "Username must be {{ .min }}-{{ .max }} characters",
            );

        let data = params(&[("field", json!("email"))]);
        assert_eq!(
            catalog
                .localize("validation.field.required", Some(&data))
                .unwrap(),
            "email is required"
        );

        let data = params(&[("min", json!(3)), ("max", json!(20))]);
        assert_eq!(
            catalog
                .localize("validation.username.length", Some(&data))
                .unwrap(),
            "Username must be 3-20 characters"
        );
    }

    #[test]
    fn test_missing_value_renders_placeholder() {
        let catalog = MessageCatalog::new("en").with_message("greeting", "Hello {{.name}}!");
        assert_eq!(
            catalog.localize("greeting", None).unwrap(),
            "Hello <no value>!"
        );

        let data = params(&[("name", Value::Null)]);
        assert_eq!(
            catalog.localize("greeting", Some(&data)).unwrap(),
            "Hello <no value>!"
        );
    }

    #[test]
    fn test_non_string_values() {
        let catalog = MessageCatalog::new("en").with_message("flags", "{{.on}} {{.list}}");
        let data = params(&[("on", json!(true)), ("list", json!([1, 2]))]);
        assert_eq!(
            catalog.localize("flags", Some(&data)).unwrap(),
            "true [1,2]"
        );
    }

    #[test]
    fn test_invalid_templates() {
        let catalog = MessageCatalog::new("en")
            .with_message("unclosed", "Hello {{.name")
            .with_message("pipeline", "{{ printf \"%d\" .n }}");

        assert!(matches!(
            catalog.localize("unclosed", None),
            Err(LocalizeError::Template { .. })
        ));
        assert!(matches!(
            catalog.localize("pipeline", None),
            Err(LocalizeError::Template { .. })
        ));
    }

    #[test]
    fn test_extend_overwrites() {
        let mut catalog = MessageCatalog::new("en").with_message("a", "first");
        catalog.extend([("a", "second"), ("b", "other")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.localize("a", None).unwrap(), "second");
    }
}
