//! Evaluation context: the attributes flags are resolved against.

use serde::{Deserialize, Serialize};

/// Context kind used for every context this app builds.
pub const USER_KIND: &str = "user";

/// The subject flags are evaluated for.
///
/// Exactly one context is active in a [`FlagProvider`](crate::provider::FlagProvider)
/// at a time. Identify replaces it wholesale; fields are never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationContext {
    #[serde(default = "default_kind")]
    pub kind: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

fn default_kind() -> String {
    USER_KIND.to_string()
}

impl EvaluationContext {
    const ANONYMOUS_KEY: &str = "user-key-123abc";
    const ANONYMOUS_NAME: &str = "Sandy Smith";
    const ANONYMOUS_EMAIL: &str = "sandy@example.com";

    /// Creates a user context with only a key set.
    pub fn user(key: impl Into<String>) -> Self {
        Self {
            kind: default_kind(),
            key: key.into(),
            name: None,
            email: None,
            role: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Looks up an attribute by name for rule matching.
    ///
    /// Unknown attributes and unset optional fields return `None`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "kind" => Some(self.kind.as_str()),
            "key" => Some(self.key.as_str()),
            "name" => self.name.as_deref(),
            "email" => self.email.as_deref(),
            "role" => self.role.as_deref(),
            _ => None,
        }
    }
}

impl Default for EvaluationContext {
    /// The placeholder context used before anyone logs in.
    fn default() -> Self {
        Self::user(Self::ANONYMOUS_KEY)
            .with_name(Self::ANONYMOUS_NAME)
            .with_email(Self::ANONYMOUS_EMAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_placeholder_user() {
        let ctx = EvaluationContext::default();
        assert_eq!(ctx.kind, "user");
        assert_eq!(ctx.key, "user-key-123abc");
        assert_eq!(ctx.name.as_deref(), Some("Sandy Smith"));
        assert_eq!(ctx.email.as_deref(), Some("sandy@example.com"));
        assert_eq!(ctx.role, None);
    }

    #[test]
    fn test_attribute_lookup() {
        let ctx = EvaluationContext::user("sandy").with_role("admin");
        assert_eq!(ctx.attribute("key"), Some("sandy"));
        assert_eq!(ctx.attribute("role"), Some("admin"));
        assert_eq!(ctx.attribute("email"), None);
        assert_eq!(ctx.attribute("country"), None);
    }

    #[test]
    fn test_kind_defaults_when_missing_from_toml() {
        let ctx: EvaluationContext = toml::from_str("key = \"abc\"\n").unwrap();
        assert_eq!(ctx.kind, "user");
        assert_eq!(ctx.key, "abc");
    }
}
