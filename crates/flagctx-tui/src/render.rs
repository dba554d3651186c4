//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::form::render_form;
use crate::state::AppState;
use crate::statusline::render_status_line;

/// Height of the status line at the bottom of the screen.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames shown on the login button while a submit is in flight.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let body = Rect::new(
        area.x,
        area.y,
        area.width,
        area.height.saturating_sub(STATUS_HEIGHT),
    );
    let status = Rect::new(
        area.x,
        area.y + body.height,
        area.width,
        area.height.min(STATUS_HEIGHT),
    );

    let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
    render_form(frame, &state.form, body, spinner);
    render_status_line(frame, &state.session, status);

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, body);
    }
}

#[cfg(test)]
mod tests {
    use flagctx_core::LoginOutcome;
    use flagctx_core::config::FormConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::form::Field;
    use crate::overlays::{AcknowledgeState, Overlay};
    use crate::statusline::SessionView;

    fn screen_text(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> AppState {
        AppState::new(
            &FormConfig::default(),
            SessionView {
                client_side_id: "client-side-id-123abc".into(),
                context_key: "user-key-123abc".into(),
                role: None,
                access_granted: Some(false),
            },
        )
    }

    #[test]
    fn test_renders_fields_and_status() {
        let mut app = app();
        app.tui.form.handle_change(Field::Username, "sandy".into());

        let text = screen_text(&app);

        assert!(text.contains("Username"));
        assert!(text.contains("Email"));
        assert!(text.contains("Role"));
        assert!(text.contains("> sandy"));
        assert!(text.contains("user-key-123abc"));
        assert!(text.contains("accessGranted=false"));
    }

    #[test]
    fn test_renders_error_line() {
        let mut app = app();
        app.tui.form.handle_change(Field::Username, "sandy".into());
        app.tui
            .form
            .handle_change(Field::Email, "sandy@example.com".into());
        app.tui.form.handle_change(Field::Role, "viewer".into());
        app.tui.form.handle_submit();
        app.tui.form.apply_outcome(&LoginOutcome::Denied {
            role: "viewer".into(),
        });

        assert!(screen_text(&app).contains("Access denied for this role"));
    }

    #[test]
    fn test_renders_acknowledgment_overlay() {
        let mut app = app();
        app.overlay = Some(Overlay::Acknowledge(AcknowledgeState::new(
            "Login successful!",
        )));

        assert!(screen_text(&app).contains("Login successful!"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let app = app();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
