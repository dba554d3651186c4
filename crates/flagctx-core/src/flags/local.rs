//! Config-driven flag source.
//!
//! Each flag has a default and an ordered list of attribute rules. The first
//! rule whose attribute matches one of its values wins; otherwise the default
//! is served. This is enough targeting to demo role-based access and nothing
//! more.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{FlagError, FlagSet, FlagSource, FlagValue};
use crate::context::EvaluationContext;

/// One targeting rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagRule {
    /// Context attribute to match (`key`, `kind`, `name`, `email`, `role`).
    pub attribute: String,
    /// Values that match (exact, case-sensitive).
    pub values: Vec<String>,
    /// Value served when the rule matches.
    pub value: FlagValue,
}

impl FlagRule {
    fn matches(&self, context: &EvaluationContext) -> bool {
        context
            .attribute(&self.attribute)
            .is_some_and(|actual| self.values.iter().any(|v| v == actual))
    }
}

/// A flag's default plus its rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagDefinition {
    pub default: FlagValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<FlagRule>,
}

impl FlagDefinition {
    pub fn evaluate(&self, context: &EvaluationContext) -> FlagValue {
        self.rules
            .iter()
            .find(|rule| rule.matches(context))
            .map_or_else(|| self.default.clone(), |rule| rule.value.clone())
    }
}

/// Options recognized in the pass-through `options` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LocalOptions {
    latency_ms: u64,
    offline: bool,
}

/// Flag source backed by definitions loaded from config.
#[derive(Debug, Clone, Default)]
pub struct LocalFlagSource {
    definitions: BTreeMap<String, FlagDefinition>,
    latency: Duration,
    offline: bool,
}

impl LocalFlagSource {
    pub fn new(definitions: BTreeMap<String, FlagDefinition>) -> Self {
        Self {
            definitions,
            ..Self::default()
        }
    }

    /// Applies the provider's pass-through options.
    ///
    /// Unknown keys are ignored; malformed known keys are an error.
    pub fn with_options(mut self, options: &toml::Table) -> anyhow::Result<Self> {
        let parsed: LocalOptions = toml::Value::Table(options.clone()).try_into()?;
        self.latency = Duration::from_millis(parsed.latency_ms);
        self.offline = parsed.offline;
        Ok(self)
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl FlagSource for LocalFlagSource {
    async fn evaluate(
        &self,
        client_side_id: &str,
        context: &EvaluationContext,
    ) -> Result<FlagSet, FlagError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.offline {
            return Err(FlagError::Unavailable(format!(
                "offline mode for client {client_side_id}"
            )));
        }
        if context.key.trim().is_empty() {
            return Err(FlagError::InvalidContext("context key is empty".into()));
        }

        Ok(self
            .definitions
            .iter()
            .map(|(key, def)| (key.clone(), def.evaluate(context)))
            .collect())
    }
}
