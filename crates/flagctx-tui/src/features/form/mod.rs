//! Login form feature slice (state, update, render).

mod render;
mod state;
mod update;

pub use render::render_form;
pub use state::{Field, FormState, SubmitPhase};
pub use update::{handle_key, handle_paste};
