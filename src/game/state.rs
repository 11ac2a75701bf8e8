//! Game state and transitions

use crate::core::{LetterBoard, WORD_LEN, Word};

use super::GameEvent;

/// Attempt limits for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Hard cap on submitted guesses; reaching it reveals the target
    pub max_guesses: usize,
    /// Guesses required before the give-up action is offered
    pub give_up_after: usize,
}

impl Rules {
    #[must_use]
    pub const fn new(max_guesses: usize, give_up_after: usize) -> Self {
        Self {
            max_guesses,
            give_up_after,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(10, 6)
    }
}

/// Derived game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No target word assigned yet (fetch pending or failed)
    NoWord,
    /// Target assigned, game in progress
    Guessing,
    /// Last submitted guess equals the target
    Won,
    /// Target revealed without a correct guess
    GaveUp,
}

/// Complete state of one game
///
/// The target, the submitted guess history, the in-progress entry, and the
/// fetch generation. Status is derived, never stored; the only recorded
/// transition is the `gave_up` marker, which distinguishes a forced reveal
/// from a genuine win (both end with the target as the last history entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    rules: Rules,
    generation: u64,
    target: Option<Word>,
    guesses: Vec<Word>,
    entry: String,
    gave_up: bool,
}

impl GameState {
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            generation: 0,
            target: None,
            guesses: Vec::new(),
            entry: String::new(),
            gave_up: false,
        }
    }

    /// Apply one event, producing the next state
    ///
    /// Pure and total: events that are invalid in the current state leave
    /// the state unchanged.
    #[must_use]
    pub fn apply(mut self, event: GameEvent) -> Self {
        match event {
            GameEvent::NewGame => {
                self.generation += 1;
                self.target = None;
                self.guesses.clear();
                self.entry.clear();
                self.gave_up = false;
            }
            GameEvent::TargetResolved { generation, word } => {
                // Stale fetches carry an old generation and are dropped
                if generation == self.generation && self.target.is_none() {
                    self.target = Some(word);
                }
            }
            GameEvent::Letter(c) => {
                if self.status() == Status::Guessing
                    && self.entry.len() < WORD_LEN
                    && c.is_ascii_alphabetic()
                {
                    self.entry.push(c.to_ascii_lowercase());
                }
            }
            GameEvent::Erase => {
                if self.status() == Status::Guessing {
                    self.entry.pop();
                }
            }
            GameEvent::Submit => {
                if self.can_submit() {
                    let guess = Word::new(&self.entry).expect("entry is 5 ASCII letters");
                    self.entry.clear();
                    self.guesses.push(guess);

                    // Out of attempts without a win: same reveal as give-up
                    if self.status() == Status::Guessing
                        && self.guesses.len() >= self.rules.max_guesses
                    {
                        self.reveal();
                    }
                }
            }
            GameEvent::GiveUp => {
                if self.can_give_up() {
                    self.entry.clear();
                    self.reveal();
                }
            }
        }
        self
    }

    fn reveal(&mut self) {
        let target = self.target.clone().expect("revealing requires a target");
        self.gave_up = true;
        self.guesses.push(target);
    }

    /// Derive the current status
    #[must_use]
    pub fn status(&self) -> Status {
        if self.target.is_none() {
            return Status::NoWord;
        }
        if self.gave_up {
            return Status::GaveUp;
        }
        if self.guesses.last() == self.target.as_ref() {
            return Status::Won;
        }
        Status::Guessing
    }

    /// Submitted guesses, oldest first (includes the reveal after give-up)
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Attempts actually made by the player
    ///
    /// Excludes the target appended by the reveal transition.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len() - usize::from(self.gave_up)
    }

    /// The in-progress entry (0-5 lowercase letters)
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// The target word, once a fetch has resolved
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    /// Current fetch generation; bumped by every new-game action
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// True when the entry is complete and may be submitted
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status() == Status::Guessing && self.entry.len() == WORD_LEN
    }

    /// True when enough attempts have been made to offer giving up
    #[must_use]
    pub fn can_give_up(&self) -> bool {
        self.status() == Status::Guessing && self.guesses.len() >= self.rules.give_up_after
    }

    /// Letter hints derived from the guess history
    ///
    /// `None` before a target is assigned.
    #[must_use]
    pub fn letter_board(&self) -> Option<LetterBoard> {
        self.target
            .as_ref()
            .map(|target| LetterBoard::from_history(&self.guesses, target))
    }

    /// True while the game accepts input for the current word
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status(), Status::Won | Status::GaveUp)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Fresh game with a resolved target
    fn game_with(target: &str) -> GameState {
        let state = GameState::default().apply(GameEvent::NewGame);
        let generation = state.generation();
        state.apply(GameEvent::TargetResolved {
            generation,
            word: word(target),
        })
    }

    fn submit(state: GameState, guess: &str) -> GameState {
        let mut state = state;
        for c in guess.chars() {
            state = state.apply(GameEvent::Letter(c));
        }
        state.apply(GameEvent::Submit)
    }

    #[test]
    fn starts_without_word() {
        let state = GameState::default();
        assert_eq!(state.status(), Status::NoWord);

        let state = state.apply(GameEvent::NewGame);
        assert_eq!(state.status(), Status::NoWord);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn resolving_target_starts_guessing() {
        let state = game_with("apple");
        assert_eq!(state.status(), Status::Guessing);
        assert_eq!(state.target().unwrap().text(), "apple");
    }

    #[test]
    fn stale_fetch_result_is_dropped() {
        let state = GameState::default()
            .apply(GameEvent::NewGame)
            .apply(GameEvent::NewGame);
        assert_eq!(state.generation(), 2);

        // Resolution from the first game arrives late
        let state = state.apply(GameEvent::TargetResolved {
            generation: 1,
            word: word("slate"),
        });
        assert_eq!(state.status(), Status::NoWord);

        // The current generation still commits
        let state = state.apply(GameEvent::TargetResolved {
            generation: 2,
            word: word("apple"),
        });
        assert_eq!(state.target().unwrap().text(), "apple");
    }

    #[test]
    fn fetch_does_not_replace_assigned_target() {
        let state = game_with("apple");
        let generation = state.generation();
        let state = state.apply(GameEvent::TargetResolved {
            generation,
            word: word("slate"),
        });
        assert_eq!(state.target().unwrap().text(), "apple");
    }

    #[test]
    fn entry_editing() {
        let mut state = game_with("apple");
        for c in ['a', 'N', 'g'] {
            state = state.apply(GameEvent::Letter(c));
        }
        assert_eq!(state.entry(), "ang"); // lowercased

        state = state.apply(GameEvent::Erase);
        assert_eq!(state.entry(), "an");
    }

    #[test]
    fn entry_ignores_non_alphabetic() {
        let mut state = game_with("apple");
        for c in ['a', '1', ' ', '!', 'b'] {
            state = state.apply(GameEvent::Letter(c));
        }
        assert_eq!(state.entry(), "ab");
    }

    #[test]
    fn entry_caps_at_word_length() {
        let mut state = game_with("apple");
        for c in "abcdefgh".chars() {
            state = state.apply(GameEvent::Letter(c));
        }
        assert_eq!(state.entry(), "abcde");
    }

    #[test]
    fn submit_requires_full_entry() {
        let mut state = game_with("apple");
        for c in "ang".chars() {
            state = state.apply(GameEvent::Letter(c));
        }
        assert!(!state.can_submit());

        state = state.apply(GameEvent::Submit);
        assert!(state.guesses().is_empty());
        assert_eq!(state.entry(), "ang");
    }

    #[test]
    fn submit_appends_and_clears_entry() {
        let state = submit(game_with("apple"), "angle");
        assert_eq!(state.guesses().len(), 1);
        assert_eq!(state.guesses()[0].text(), "angle");
        assert_eq!(state.entry(), "");
        assert_eq!(state.status(), Status::Guessing);
    }

    #[test]
    fn correct_guess_wins() {
        let state = submit(submit(game_with("apple"), "angle"), "apple");
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.attempts(), 2);
    }

    #[test]
    fn no_input_accepted_after_win() {
        let state = submit(game_with("apple"), "apple");
        assert_eq!(state.status(), Status::Won);

        let state = state.apply(GameEvent::Letter('x'));
        assert_eq!(state.entry(), "");

        let state = submit(state, "angle");
        assert_eq!(state.guesses().len(), 1);
    }

    #[test]
    fn give_up_requires_minimum_attempts() {
        let mut state = game_with("apple");
        assert!(!state.can_give_up());

        state = state.apply(GameEvent::GiveUp);
        assert_eq!(state.status(), Status::Guessing);

        for guess in ["angle", "brick", "crane", "dense", "eagle", "fable"] {
            state = submit(state, guess);
        }
        assert!(state.can_give_up());
    }

    #[test]
    fn give_up_reveals_target() {
        let mut state = game_with("apple");
        for guess in ["angle", "brick", "crane", "dense", "eagle", "fable"] {
            state = submit(state, guess);
        }

        let state = state.apply(GameEvent::GiveUp);
        assert_eq!(state.status(), Status::GaveUp);
        // The target is appended as the final history entry...
        assert_eq!(state.guesses().len(), 7);
        assert_eq!(state.guesses().last().unwrap().text(), "apple");
        // ...but the reported attempt count excludes the reveal
        assert_eq!(state.attempts(), 6);
    }

    #[test]
    fn exhausting_attempts_reveals_target() {
        let rules = Rules::new(3, 2);
        let state = GameState::new(rules).apply(GameEvent::NewGame);
        let generation = state.generation();
        let mut state = state.apply(GameEvent::TargetResolved {
            generation,
            word: word("apple"),
        });

        for guess in ["angle", "brick", "crane"] {
            state = submit(state, guess);
        }

        assert_eq!(state.status(), Status::GaveUp);
        assert_eq!(state.guesses().last().unwrap().text(), "apple");
        assert_eq!(state.attempts(), 3);
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let rules = Rules::new(2, 1);
        let state = GameState::new(rules).apply(GameEvent::NewGame);
        let generation = state.generation();
        let mut state = state.apply(GameEvent::TargetResolved {
            generation,
            word: word("apple"),
        });

        state = submit(state, "angle");
        state = submit(state, "apple");
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.attempts(), 2);
    }

    #[test]
    fn new_game_resets_everything() {
        let state = submit(game_with("apple"), "apple");
        let generation = state.generation();

        let state = state.apply(GameEvent::NewGame);
        assert_eq!(state.status(), Status::NoWord);
        assert_eq!(state.generation(), generation + 1);
        assert!(state.guesses().is_empty());
        assert_eq!(state.entry(), "");
        assert_eq!(state.attempts(), 0);
    }

    #[test]
    fn letter_board_tracks_history() {
        use crate::core::LetterScore;

        let state = submit(game_with("apple"), "angle");
        let board = state.letter_board().unwrap();
        assert_eq!(board.score_for(b'a'), Some(LetterScore::Match));
        assert_eq!(board.score_for(b'n'), Some(LetterScore::Unmatch));
    }
}
