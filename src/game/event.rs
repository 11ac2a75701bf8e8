//! Game events
//!
//! Discrete inputs to the state machine: user keys, the submit/give-up
//! actions, and the resolution of a background word fetch.

use crate::core::Word;

/// An input event for [`super::GameState::apply`]
///
/// Events that are not valid in the current state are ignored, so feeding
/// arbitrary events is always safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Start over: bump the fetch generation and drop all game data
    NewGame,
    /// A word fetch finished; committed only if `generation` is current
    TargetResolved { generation: u64, word: Word },
    /// Append a letter to the in-progress entry
    Letter(char),
    /// Remove the last letter of the in-progress entry
    Erase,
    /// Commit the entry as a guess (requires a full 5-letter entry)
    Submit,
    /// Reveal the target and end the game (requires enough attempts)
    GiveUp,
}
