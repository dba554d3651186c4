//! Non-interactive login: same flow as the form, results on stdout/stderr.

use anyhow::Result;
use flagctx_core::login::{self, SUCCESS_MESSAGE};
use flagctx_core::{FlagProvider, FormData};

/// Submits once. Prints the success message, or fails with the form's error
/// line so the process exits non-zero.
pub async fn run(
    provider: &FlagProvider,
    username: String,
    email: String,
    role: String,
) -> Result<()> {
    let data = FormData {
        username,
        email,
        role,
    };

    let outcome = login::submit(provider, &data).await;
    match outcome.error_message() {
        None => {
            println!("{SUCCESS_MESSAGE}");
            Ok(())
        }
        Some(message) => anyhow::bail!(message),
    }
}
