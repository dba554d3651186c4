//! Login form key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Field, FormState};
use crate::effects::UiEffect;

/// Routes a key press to the focused form element.
///
/// Quit keys are handled by the top-level reducer before this is called.
pub fn handle_key(form: &mut FormState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = form.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = form.focus.prev();
            vec![]
        }
        KeyCode::Enter => match form.focus {
            Field::Role | Field::Submit => form.handle_submit(),
            field => {
                form.focus = field.next();
                vec![]
            }
        },
        KeyCode::Char('u') if ctrl => {
            edit_focused(form, |_| String::new());
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            edit_focused(form, |value| {
                let mut value = value.to_string();
                value.push(c);
                value
            });
            vec![]
        }
        KeyCode::Backspace => {
            edit_focused(form, |value| {
                let mut value = value.to_string();
                value.pop();
                value
            });
            vec![]
        }
        _ => vec![],
    }
}

/// Appends pasted text to the focused field. Newlines are dropped.
pub fn handle_paste(form: &mut FormState, text: &str) {
    let text: String = text.chars().filter(|c| !c.is_control()).collect();
    if text.is_empty() {
        return;
    }
    edit_focused(form, |value| format!("{value}{text}"));
}

fn edit_focused(form: &mut FormState, edit: impl FnOnce(&str) -> String) {
    let field = form.focus;
    if !field.is_input() {
        return;
    }
    let value = edit(form.value(field));
    form.handle_change(field, value);
}
