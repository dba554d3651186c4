//! Login form state.

use flagctx_core::login::{FormData, LoginOutcome};

use crate::effects::UiEffect;

const REQUIRED_HINT: &str = "Please fill out this field.";
const EMAIL_HINT: &str = "Please enter an email address like name@example.com.";

/// Focusable form elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Username,
    Email,
    Role,
    Submit,
}

impl Field {
    pub const INPUTS: [Field; 3] = [Field::Username, Field::Email, Field::Role];

    pub fn next(self) -> Self {
        match self {
            Field::Username => Field::Email,
            Field::Email => Field::Role,
            Field::Role => Field::Submit,
            Field::Submit => Field::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Username => Field::Submit,
            Field::Email => Field::Username,
            Field::Role => Field::Email,
            Field::Submit => Field::Role,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Role => "Role",
            Field::Submit => "Login",
        }
    }

    pub fn is_input(self) -> bool {
        !matches!(self, Field::Submit)
    }
}

/// Per-submission phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Form fields, focus, and the error line.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub data: FormData,
    pub focus: Field,
    /// Login error shown under the form. `None` means no error.
    pub error: Option<String>,
    /// Field-level validation message (required/email), shown before any
    /// identify happens.
    pub hint: Option<String>,
    pub phase: SubmitPhase,
    clear_error_on_edit: bool,
}

impl FormState {
    pub fn new(clear_error_on_edit: bool) -> Self {
        Self {
            clear_error_on_edit,
            ..Self::default()
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.data.username,
            Field::Email => &self.data.email,
            Field::Role => &self.data.role,
            Field::Submit => "",
        }
    }

    /// Merges one field into the form data.
    ///
    /// A shown error survives edits unless `clear_error_on_edit` is set.
    pub fn handle_change(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Username => &mut self.data.username,
            Field::Email => &mut self.data.email,
            Field::Role => &mut self.data.role,
            Field::Submit => return,
        };
        *slot = value;
        self.hint = None;
        if self.clear_error_on_edit {
            self.error = None;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Checks presence of every field and the shape of the email.
    ///
    /// Like a browser `required` input, whitespace counts as a value.
    fn validate(&self) -> Result<(), (Field, &'static str)> {
        for field in Field::INPUTS {
            if self.value(field).is_empty() {
                return Err((field, REQUIRED_HINT));
            }
        }
        if !looks_like_email(&self.data.email) {
            return Err((Field::Email, EMAIL_HINT));
        }
        Ok(())
    }

    /// Starts a submit.
    ///
    /// Ignored while a submit is already in flight. Invalid input moves focus
    /// to the offending field and sets `hint` without touching `error`.
    pub fn handle_submit(&mut self) -> Vec<UiEffect> {
        if self.is_submitting() {
            return vec![];
        }
        // Email inputs strip surrounding whitespace from their value.
        self.data.email = self.data.email.trim().to_string();
        if let Err((field, hint)) = self.validate() {
            self.focus = field;
            self.hint = Some(hint.to_string());
            return vec![];
        }

        self.error = None;
        self.hint = None;
        self.phase = SubmitPhase::Submitting;
        vec![UiEffect::SubmitLogin {
            data: self.data.clone(),
        }]
    }

    /// Applies a finished submit. Returns true when access was granted.
    ///
    /// Outcomes that arrive while no submit is in flight are dropped.
    pub fn apply_outcome(&mut self, outcome: &LoginOutcome) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        self.error = outcome.error_message().map(str::to_string);
        matches!(outcome, LoginOutcome::Granted { .. })
    }
}

/// Mirrors the browser's `type=email` check: text on both sides of one `@`.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
}
