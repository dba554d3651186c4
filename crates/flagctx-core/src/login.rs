//! Login submit flow: identify with the entered fields, then read `accessGranted`.

use crate::context::EvaluationContext;
use crate::flags::ACCESS_GRANTED;
use crate::provider::FlagProvider;

pub const SUCCESS_MESSAGE: &str = "Login successful!";
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied for this role";
pub const LOGIN_ERROR_MESSAGE: &str = "An error occurred during login";

/// Fields entered in the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&FormData> for EvaluationContext {
    fn from(data: &FormData) -> Self {
        EvaluationContext::user(data.username.clone())
            .with_email(data.email.clone())
            .with_role(data.role.clone())
    }
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// `accessGranted` was on for the new context.
    Granted { role: String },
    /// `accessGranted` was off or missing.
    Denied { role: String },
    /// Identify failed. The cause is logged, not surfaced.
    Failed,
}

impl LoginOutcome {
    /// The error line to show, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            LoginOutcome::Granted { .. } => None,
            LoginOutcome::Denied { .. } => Some(ACCESS_DENIED_MESSAGE),
            LoginOutcome::Failed => Some(LOGIN_ERROR_MESSAGE),
        }
    }
}

/// Re-identifies the provider with `data` and decides access.
///
/// The flag is read from the snapshot identify published, so it always
/// reflects this submit's context.
pub async fn submit(provider: &FlagProvider, data: &FormData) -> LoginOutcome {
    let context = EvaluationContext::from(data);

    let snapshot = match provider.identify(context).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::error!(error = %err, username = %data.username, "error during login");
            return LoginOutcome::Failed;
        }
    };

    let role = data.role.clone();
    if snapshot.flags.bool_variation(ACCESS_GRANTED, false) {
        tracing::info!(role = %role, "access granted");
        LoginOutcome::Granted { role }
    } else {
        tracing::warn!(role = %role, "access denied");
        LoginOutcome::Denied { role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::FlagError;
    use crate::provider::ProviderConfig;
    use crate::provider::tests::ScriptedSource;

    fn sandy() -> FormData {
        FormData {
            username: "sandy".into(),
            email: "sandy@example.com".into(),
            role: "admin".into(),
        }
    }

    async fn provider_with(source: std::sync::Arc<ScriptedSource>) -> FlagProvider {
        let config = ProviderConfig {
            client_side_id: "client-side-id-123abc".into(),
            ..ProviderConfig::default()
        };
        FlagProvider::initialize(config, source).await.unwrap()
    }

    #[test]
    fn test_context_from_form_data() {
        let ctx = EvaluationContext::from(&sandy());
        assert_eq!(ctx.kind, "user");
        assert_eq!(ctx.key, "sandy");
        assert_eq!(ctx.email.as_deref(), Some("sandy@example.com"));
        assert_eq!(ctx.role.as_deref(), Some("admin"));
        assert_eq!(ctx.name, None);
    }

    #[tokio::test]
    async fn test_granted_when_flag_true() {
        let source = ScriptedSource::new(vec![
            ScriptedSource::access(false),
            ScriptedSource::access(true),
        ]);
        let provider = provider_with(source).await;

        let outcome = submit(&provider, &sandy()).await;

        assert_eq!(
            outcome,
            LoginOutcome::Granted {
                role: "admin".into()
            }
        );
        assert_eq!(outcome.error_message(), None);
    }

    #[tokio::test]
    async fn test_denied_when_flag_false() {
        let source = ScriptedSource::new(vec![
            ScriptedSource::access(true),
            ScriptedSource::access(false),
        ]);
        let provider = provider_with(source).await;

        let outcome = submit(&provider, &sandy()).await;

        assert_eq!(outcome.error_message(), Some("Access denied for this role"));
    }

    #[tokio::test]
    async fn test_identify_error_is_generic_failure() {
        let source = ScriptedSource::new(vec![
            ScriptedSource::access(true),
            Err(FlagError::Unavailable("network".into())),
        ]);
        let provider = provider_with(source).await;

        let outcome = submit(&provider, &sandy()).await;

        assert_eq!(outcome, LoginOutcome::Failed);
        assert_eq!(
            outcome.error_message(),
            Some("An error occurred during login")
        );
    }

    #[tokio::test]
    async fn test_identify_completes_before_flag_read() {
        // The initial context grants access; the new one does not. A flag read
        // before identify finished would wrongly grant.
        let source = ScriptedSource::new(vec![
            ScriptedSource::access(true),
            ScriptedSource::access(false),
        ]);
        let provider = provider_with(source.clone()).await;

        let outcome = submit(&provider, &sandy()).await;

        assert!(matches!(outcome, LoginOutcome::Denied { .. }));
        let seen = source.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1], EvaluationContext::from(&sandy()));
        assert_eq!(provider.context().key, "sandy");
    }

    #[tokio::test]
    async fn test_missing_flag_denies() {
        let source = ScriptedSource::new(vec![
            ScriptedSource::access(true),
            Ok(crate::flags::FlagSet::new()),
        ]);
        let provider = provider_with(source).await;

        let outcome = submit(&provider, &sandy()).await;

        assert!(matches!(outcome, LoginOutcome::Denied { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_submits_decide_on_their_own_context() {
        let source = crate::config::Config::default()
            .flag_source()
            .unwrap()
            .with_latency(std::time::Duration::from_millis(5));
        let config = ProviderConfig {
            client_side_id: "client-side-id-123abc".into(),
            ..ProviderConfig::default()
        };
        let provider = FlagProvider::initialize(config, std::sync::Arc::new(source))
            .await
            .unwrap();
        let guest = FormData {
            role: "guest".into(),
            ..sandy()
        };

        let admin = sandy();
        let (admin_outcome, guest_outcome) =
            tokio::join!(submit(&provider, &admin), submit(&provider, &guest));

        assert_eq!(
            admin_outcome,
            LoginOutcome::Granted {
                role: "admin".into()
            }
        );
        assert_eq!(
            guest_outcome,
            LoginOutcome::Denied {
                role: "guest".into()
            }
        );
    }
}
