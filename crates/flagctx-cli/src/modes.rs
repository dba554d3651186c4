//! Runtime execution modes.
//!
//! The interactive login form lives behind the `tui` feature.

#[cfg(feature = "tui")]
pub use flagctx_tui::run_login_form;

#[cfg(not(feature = "tui"))]
pub async fn run_login_form(
    _config: &flagctx_core::config::Config,
    _provider: flagctx_core::FlagProvider,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
