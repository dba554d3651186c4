//! Full-screen login form for flagctx.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr, stdout};

use anyhow::Result;
pub use features::{form, statusline};
use flagctx_core::FlagProvider;
use flagctx_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive login form against an initialized provider.
///
/// # Errors
/// Fails when stdout is not a terminal or the terminal cannot be driven.
pub async fn run_login_form(config: &Config, provider: FlagProvider) -> Result<()> {
    if !stdout().is_terminal() || !stderr().is_terminal() {
        anyhow::bail!(
            "The login form requires a terminal.\n\
             Use `flagctx login --username ... --email ... --role ...` for non-interactive use."
        );
    }

    let mut runtime = TuiRuntime::new(config, provider)?;
    tracing::info!("login form started");

    // The event loop blocks; let the scheduler move other tasks off this worker
    // so spawned submits keep running.
    tokio::task::block_in_place(|| runtime.run())?;

    tracing::info!("login form closed");
    Ok(())
}
