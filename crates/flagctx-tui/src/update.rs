//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flagctx_core::login::SUCCESS_MESSAGE;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::form;
use crate::overlays::{AcknowledgeState, Overlay, OverlayExt};
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginFinished { outcome } => {
            if app.tui.form.apply_outcome(&outcome) {
                app.overlay = Some(Overlay::Acknowledge(AcknowledgeState::new(SUCCESS_MESSAGE)));
            }
            vec![]
        }
        UiEvent::SessionChanged { snapshot } => {
            app.tui.session.apply(&snapshot);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.overlay.is_none() {
                form::handle_paste(&mut app.tui.form, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }
    if app.overlay.handle_key(key) {
        return vec![];
    }
    if key.code == KeyCode::Esc {
        return vec![UiEffect::Quit];
    }
    form::handle_key(&mut app.tui.form, key)
}
