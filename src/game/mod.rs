//! Game state machine
//!
//! A single [`GameState`] owns everything a game needs; every change goes
//! through the pure transition [`GameState::apply`], so the whole game is
//! testable without a terminal attached.

mod event;
mod state;

pub use event::GameEvent;
pub use state::{GameState, Rules, Status};
