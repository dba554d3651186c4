//! UI events consumed by the reducer.

use crossterm::event::Event;
use flagctx_core::{LoginOutcome, Snapshot};

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Frame cadence tick (drives spinner and redraw).
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// A submit finished: identify completed (or failed) and the flag was read.
    LoginFinished { outcome: LoginOutcome },
    /// The provider published a new context/flags snapshot.
    SessionChanged { snapshot: Snapshot },
}
