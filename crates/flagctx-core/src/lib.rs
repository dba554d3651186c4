//! Core of flagctx: evaluation context, flag provider, and the login flow.

pub mod config;
pub mod context;
pub mod flags;
pub mod logging;
pub mod login;
pub mod provider;

pub use context::EvaluationContext;
pub use flags::{FlagError, FlagSet, FlagSource, FlagValue};
pub use login::{FormData, LoginOutcome};
pub use provider::{FlagProvider, ProviderConfig, Snapshot};
