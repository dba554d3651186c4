//! Effect handlers: async functions that return the event to feed back.

use flagctx_core::{FlagProvider, FormData, login};

use crate::events::UiEvent;

/// Identifies with the form data, then reads the access flag.
pub async fn submit_login(provider: FlagProvider, data: FormData) -> UiEvent {
    let outcome = login::submit(&provider, &data).await;
    UiEvent::LoginFinished { outcome }
}
