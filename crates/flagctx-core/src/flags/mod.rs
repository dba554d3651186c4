//! Flag values, flag sets, and the flag source boundary.
//!
//! A [`FlagSource`] stands in for the feature-flag SDK: given a client-side id
//! and a context, it returns the full set of flag values for that context.
//! `local` provides a config-driven source so the app runs without a backend.

pub mod local;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use local::{FlagDefinition, FlagRule, LocalFlagSource};

use crate::context::EvaluationContext;

/// Flag key read by the login form.
pub const ACCESS_GRANTED: &str = "accessGranted";

/// A resolved flag value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl FlagValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

/// All flag values for one context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagSet {
    values: BTreeMap<String, FlagValue>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FlagValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FlagValue> {
        self.values.get(key)
    }

    /// Reads a boolean flag, falling back to `default` when the flag is
    /// missing or holds a non-boolean variation.
    pub fn bool_variation(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .and_then(FlagValue::as_bool)
            .unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<FlagValue>> FromIterator<(K, V)> for FlagSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FlagSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

/// Errors raised at the flag source boundary.
///
/// The login flow does not distinguish between these; they only reach logs.
#[derive(Debug, Error)]
pub enum FlagError {
    #[error("client-side id must not be empty")]
    InvalidClientId,
    #[error("invalid context: {0}")]
    InvalidContext(String),
    #[error("flag source unavailable: {0}")]
    Unavailable(String),
}

/// Evaluates every flag for a context.
#[async_trait]
pub trait FlagSource: Send + Sync {
    async fn evaluate(
        &self,
        client_side_id: &str,
        context: &EvaluationContext,
    ) -> Result<FlagSet, FlagError>;
}
