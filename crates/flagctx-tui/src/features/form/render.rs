//! Login form view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{Field, FormState};
use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::{
    InputHint, InputLine, centered_area, inner_area, render_container, render_hints,
    render_input_line,
};

const FORM_WIDTH: u16 = 48;
/// Border (2) + 3 fields x (label + input + gap) + button + error + hints.
const FORM_HEIGHT: u16 = 2 + 3 * 3 + 1 + 2 + 1;

const ACCENT: Color = Color::Blue;
const ERROR_COLOR: Color = Color::Red;

/// Renders the form centered in `area`.
pub fn render_form(frame: &mut Frame, form: &FormState, area: Rect, spinner: &str) {
    let popup = centered_area(area, FORM_WIDTH, FORM_HEIGHT);
    render_container(frame, popup, "Login", ACCENT);
    let inner = inner_area(popup);

    let mut y = inner.y;
    for field in Field::INPUTS {
        if y + 1 >= inner.bottom() {
            break;
        }
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(field.label(), label_style)),
            Rect::new(inner.x, y, inner.width, 1),
        );
        render_input_line(
            frame,
            Rect::new(inner.x, y + 1, inner.width, 1),
            &InputLine {
                value: form.value(field),
                prompt: "> ",
                focused,
                prompt_color: if focused { ACCENT } else { Color::DarkGray },
                text_color: Color::White,
                cursor_color: ACCENT,
            },
        );
        y += 3;
    }

    if y < inner.bottom() {
        frame.render_widget(
            Paragraph::new(button_line(form, spinner)).alignment(Alignment::Center),
            Rect::new(inner.x, y, inner.width, 1),
        );
        y += 1;
    }

    if y < inner.bottom()
        && let Some(line) = message_line(form, inner.width as usize)
    {
        frame.render_widget(
            Paragraph::new(line),
            Rect::new(inner.x, y + 1, inner.width, 1),
        );
    }

    render_hints(
        frame,
        inner,
        &[
            InputHint::new("Tab", "next"),
            InputHint::new("Enter", "login"),
            InputHint::new("Esc", "quit"),
        ],
        ACCENT,
    );
}

fn button_line(form: &FormState, spinner: &str) -> Line<'static> {
    let label = if form.is_submitting() {
        format!(" {spinner} Logging in… ")
    } else {
        format!("  {}  ", Field::Submit.label())
    };
    let style = if form.focus == Field::Submit {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(label, style))
}

/// The error line wins over a validation hint; both are one line.
fn message_line(form: &FormState, width: usize) -> Option<Line<'static>> {
    if let Some(error) = &form.error {
        return Some(Line::from(Span::styled(
            truncate_with_ellipsis(error, width),
            Style::default().fg(ERROR_COLOR),
        )));
    }
    form.hint.as_ref().map(|hint| {
        Line::from(Span::styled(
            truncate_with_ellipsis(hint, width),
            Style::default().fg(Color::Yellow),
        ))
    })
}
