use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::SessionView;
use crate::common::truncate_with_ellipsis;

const SEPARATOR: &str = " │ ";

pub fn render_status_line(frame: &mut Frame, session: &SessionView, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Gray);
    let width = area.width as usize / 3;

    let context = match &session.role {
        Some(role) => format!("{} ({role})", session.context_key),
        None => session.context_key.clone(),
    };
    let (flag_text, flag_color) = match session.access_granted {
        Some(true) => ("true", Color::Green),
        Some(false) => ("false", Color::Red),
        None => ("unset", Color::DarkGray),
    };

    let line = Line::from(vec![
        Span::styled(" client ", dim),
        Span::styled(
            truncate_with_ellipsis(&session.client_side_id, width),
            value,
        ),
        Span::styled(SEPARATOR, dim),
        Span::styled("context ", dim),
        Span::styled(truncate_with_ellipsis(&context, width), value),
        Span::styled(SEPARATOR, dim),
        Span::styled("accessGranted=", dim),
        Span::styled(flag_text, Style::default().fg(flag_color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
