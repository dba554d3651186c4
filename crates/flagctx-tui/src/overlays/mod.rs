//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay owns its state, key handler, and render function.
//!
//! - `acknowledge.rs`: blocking message dialog shown after a successful login
//! - `render_utils.rs`: shared rendering utilities

pub mod acknowledge;
pub mod render_utils;

pub use acknowledge::AcknowledgeState;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
        }
    }
}

/// The active modal overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Acknowledge(AcknowledgeState),
}

impl Overlay {
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Acknowledge(state) => state.handle_key(key),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Acknowledge(state) => state.render(frame, area),
        }
    }
}

/// Convenience methods for `Option<Overlay>` used by the reducer.
pub trait OverlayExt {
    /// Routes a key to the open overlay. Returns false when none is open.
    fn handle_key(&mut self, key: KeyEvent) -> bool;
}

impl OverlayExt for Option<Overlay> {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(overlay) = self.as_mut() else {
            return false;
        };
        if let OverlayTransition::Close = overlay.handle_key(key).transition {
            *self = None;
        }
        true
    }
}
