//! Blocking acknowledgment dialog (the success "alert").

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{InputHint, centered_area, inner_area, render_container, render_hints};

const WIDTH: u16 = 40;
const HEIGHT: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcknowledgeState {
    pub message: String,
}

impl AcknowledgeState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Any confirming key dismisses; everything else is swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_area(area, WIDTH, HEIGHT);
        render_container(frame, popup, "flagctx", Color::Green);
        let inner = inner_area(popup);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::Green),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        render_hints(frame, inner, &[InputHint::new("Enter", "OK")], Color::Green);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::overlays::OverlayTransition;

    #[test]
    fn test_enter_closes() {
        let mut state = AcknowledgeState::new("Login successful!");
        let update = state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(update.transition, OverlayTransition::Close));
    }

    #[test]
    fn test_other_keys_are_swallowed() {
        let mut state = AcknowledgeState::new("Login successful!");
        let update = state.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(matches!(update.transition, OverlayTransition::Stay));
    }
}
