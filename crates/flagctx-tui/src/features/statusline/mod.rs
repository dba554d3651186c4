//! Status line feature slice.
//!
//! Shows which context the provider currently holds and the flag the form
//! reads, so an identify is visible the moment it lands.

mod render;
mod state;

pub use render::render_status_line;
pub use state::SessionView;
