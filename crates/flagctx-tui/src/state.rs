//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── form: FormState        (fields, focus, error, submit phase)
//! │   └── session: SessionView   (provider context/flags for display)
//! └── overlay: Option<Overlay>   (modal overlays)
//! ```
//!
//! Overlay state is kept beside `TuiState` so overlay handlers and the form
//! can be borrowed mutably at the same time.

use flagctx_core::config::FormConfig;

use crate::form::FormState;
use crate::overlays::Overlay;
use crate::statusline::SessionView;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(form: &FormConfig, session: SessionView) -> Self {
        Self {
            tui: TuiState::new(form, session),
            overlay: None,
        }
    }
}

pub struct TuiState {
    pub form: FormState,
    pub session: SessionView,
    pub should_quit: bool,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(form: &FormConfig, session: SessionView) -> Self {
        Self {
            form: FormState::new(form.clear_error_on_edit),
            session,
            should_quit: false,
            spinner_frame: 0,
        }
    }
}
