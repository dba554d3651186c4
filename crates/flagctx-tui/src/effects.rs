//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never touches the provider or spawns tasks directly.

use flagctx_core::FormData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Identify with the form data, then read `accessGranted`.
    SubmitLogin { data: FormData },
}
