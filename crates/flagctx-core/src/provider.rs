//! Feature-flag provider: the single owner of the active context.
//!
//! The provider is an explicit handle passed to whoever needs flags, not
//! ambient state. It publishes `(context, flags)` as one [`Snapshot`] through a
//! `watch` channel so readers never see a new context paired with stale flags.
//!
//! `identify` is the only mutator.

use std::sync::Arc;

use anyhow::Context as _;
use tokio::sync::watch;

use crate::context::EvaluationContext;
use crate::flags::{FlagError, FlagSet, FlagSource};

/// Construction options for [`FlagProvider::initialize`].
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    pub client_side_id: String,
    pub context: EvaluationContext,
    /// Opaque options for the flag source.
    pub options: toml::Table,
}

/// The active context and the flags derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub context: EvaluationContext,
    pub flags: FlagSet,
}

struct Inner {
    client_side_id: String,
    source: Arc<dyn FlagSource>,
    state: watch::Sender<Snapshot>,
}

/// Cheaply cloneable handle to the provider.
#[derive(Clone)]
pub struct FlagProvider {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for FlagProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagProvider")
            .field("client_side_id", &self.inner.client_side_id)
            .field("context", &self.inner.state.borrow().context)
            .finish_non_exhaustive()
    }
}

impl FlagProvider {
    /// Builds a ready provider: evaluates flags for the initial context.
    ///
    /// # Errors
    /// Fails if the client-side id is empty or the initial evaluation fails.
    /// Callers treat this as fatal.
    pub async fn initialize(
        config: ProviderConfig,
        source: Arc<dyn FlagSource>,
    ) -> anyhow::Result<Self> {
        if config.client_side_id.trim().is_empty() {
            return Err(FlagError::InvalidClientId.into());
        }

        let flags = source
            .evaluate(&config.client_side_id, &config.context)
            .await
            .context("Failed to evaluate flags for the initial context")?;

        tracing::info!(
            client_side_id = %config.client_side_id,
            context_key = %config.context.key,
            flag_count = flags.len(),
            "flag provider initialized"
        );

        let (state, _) = watch::channel(Snapshot {
            context: config.context,
            flags,
        });

        Ok(Self {
            inner: Arc::new(Inner {
                client_side_id: config.client_side_id,
                source,
                state,
            }),
        })
    }

    /// Replaces the active context and re-evaluates flags.
    ///
    /// Returns the snapshot it published, which later identify calls cannot
    /// change. On error the previous snapshot stays active.
    ///
    /// # Errors
    /// Propagates the flag source error unchanged.
    pub async fn identify(&self, context: EvaluationContext) -> Result<Snapshot, FlagError> {
        tracing::debug!(context_key = %context.key, "identify requested");

        let flags = self
            .inner
            .source
            .evaluate(&self.inner.client_side_id, &context)
            .await?;

        tracing::debug!(
            context_key = %context.key,
            flag_count = flags.len(),
            "identify completed"
        );
        let snapshot = Snapshot { context, flags };
        self.inner.state.send_replace(snapshot.clone());
        Ok(snapshot)
    }

    pub fn client_side_id(&self) -> &str {
        &self.inner.client_side_id
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.state.borrow().clone()
    }

    pub fn context(&self) -> EvaluationContext {
        self.inner.state.borrow().context.clone()
    }

    pub fn flags(&self) -> FlagSet {
        self.inner.state.borrow().flags.clone()
    }

    /// Subscribes to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.state.subscribe()
    }
}
