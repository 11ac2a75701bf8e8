//! Per-letter guess feedback
//!
//! A guessed letter is scored against the target word with positional
//! precedence: exact match first, then presence elsewhere, then absence.
//! Scores across the whole guess history fold into a [`LetterBoard`],
//! the letter-to-best-score map behind the hint strip.

use rustc_hash::FxHashMap;

use super::{WORD_LEN, Word};

/// Score for one guessed letter against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterScore {
    /// Letter is in the correct position
    Match,
    /// Letter is in the target, but at a different position
    Mismatch,
    /// Letter does not appear in the target at all
    Unmatch,
}

/// Score a single position of a guess against an optional target
///
/// Returns `None` when no target has been assigned yet or when the guess
/// has no letter at `position` (an in-progress entry). The guess must be
/// lowercase ASCII; submitted guesses and entries are built that way.
///
/// # Examples
/// ```
/// use word_slot::core::{LetterScore, Word, classify};
///
/// let target = Word::new("apple").unwrap();
/// assert_eq!(classify(0, "angle", Some(&target)), Some(LetterScore::Match));
/// assert_eq!(classify(2, "angle", Some(&target)), Some(LetterScore::Unmatch));
/// assert_eq!(classify(3, "an", Some(&target)), None);
/// assert_eq!(classify(0, "angle", None), None);
/// ```
#[must_use]
pub fn classify(position: usize, guess: &str, target: Option<&Word>) -> Option<LetterScore> {
    let target = target?;
    let letter = guess.as_bytes().get(position).copied()?;

    if target.char_at(position) == letter {
        Some(LetterScore::Match)
    } else if target.has_letter(letter) {
        Some(LetterScore::Mismatch)
    } else {
        Some(LetterScore::Unmatch)
    }
}

/// Score every position of a guess row
///
/// Positions without a letter (or without a target) score `None`.
#[must_use]
pub fn score_row(guess: &str, target: Option<&Word>) -> [Option<LetterScore>; WORD_LEN] {
    let mut row = [None; WORD_LEN];
    for (position, slot) in row.iter_mut().enumerate() {
        *slot = classify(position, guess, target);
    }
    row
}

/// Best-observed score per guessed letter
///
/// Folds the guess history into a letter-to-score map: a letter already
/// scored [`LetterScore::Match`] is never downgraded; otherwise the most
/// recent score for that letter wins.
#[derive(Debug, Default, Clone)]
pub struct LetterBoard {
    scores: FxHashMap<u8, LetterScore>,
}

impl LetterBoard {
    /// Build the board from the submitted guess history
    #[must_use]
    pub fn from_history(history: &[Word], target: &Word) -> Self {
        let mut board = Self::default();
        for guess in history {
            for position in 0..WORD_LEN {
                if let Some(score) = classify(position, guess.text(), Some(target)) {
                    board.record(guess.char_at(position), score);
                }
            }
        }
        board
    }

    fn record(&mut self, letter: u8, score: LetterScore) {
        match self.scores.get(&letter) {
            Some(LetterScore::Match) => {}
            _ => {
                self.scores.insert(letter, score);
            }
        }
    }

    /// Best score observed for a letter, if it has been guessed
    #[inline]
    #[must_use]
    pub fn score_for(&self, letter: u8) -> Option<LetterScore> {
        self.scores.get(&letter).copied()
    }

    /// True when no letters have been scored yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn classify_exact_position_is_match() {
        let target = word("apple");
        for (position, _) in "apple".bytes().enumerate() {
            assert_eq!(
                classify(position, "apple", Some(&target)),
                Some(LetterScore::Match)
            );
        }
    }

    #[test]
    fn classify_elsewhere_is_mismatch() {
        let target = word("apple");
        // 'e' appears in the target, but not at position 0
        assert_eq!(
            classify(0, "early", Some(&target)),
            Some(LetterScore::Mismatch)
        );
        // 'p' at position 0 of "pearl" sits at positions 1-2 of "apple"
        assert_eq!(
            classify(0, "pearl", Some(&target)),
            Some(LetterScore::Mismatch)
        );
    }

    #[test]
    fn classify_absent_is_unmatch() {
        let target = word("apple");
        assert_eq!(
            classify(0, "zebra", Some(&target)),
            Some(LetterScore::Unmatch)
        );
    }

    #[test]
    fn classify_without_target_is_none() {
        assert_eq!(classify(0, "apple", None), None);
    }

    #[test]
    fn classify_short_entry_is_none_past_end() {
        let target = word("apple");
        assert_eq!(classify(2, "ap", Some(&target)), None);
        assert_eq!(classify(0, "", Some(&target)), None);
    }

    #[test]
    fn classify_positional_precedence() {
        // target "apple", guess "angle":
        // a=match, n=unmatch, g=unmatch, l=match, e=match
        let target = word("apple");
        let expected = [
            Some(LetterScore::Match),
            Some(LetterScore::Unmatch),
            Some(LetterScore::Unmatch),
            Some(LetterScore::Match),
            Some(LetterScore::Match),
        ];
        assert_eq!(score_row("angle", Some(&target)), expected);
    }

    #[test]
    fn score_row_partial_entry() {
        let target = word("apple");
        let row = score_row("apx", Some(&target));
        assert_eq!(row[0], Some(LetterScore::Match));
        assert_eq!(row[1], Some(LetterScore::Match));
        assert_eq!(row[2], Some(LetterScore::Unmatch));
        assert_eq!(row[3], None);
        assert_eq!(row[4], None);
    }

    #[test]
    fn board_folds_history() {
        let target = word("apple");
        let board = LetterBoard::from_history(&[word("angle")], &target);

        assert_eq!(board.score_for(b'a'), Some(LetterScore::Match));
        assert_eq!(board.score_for(b'n'), Some(LetterScore::Unmatch));
        assert_eq!(board.score_for(b'g'), Some(LetterScore::Unmatch));
        assert_eq!(board.score_for(b'l'), Some(LetterScore::Match));
        assert_eq!(board.score_for(b'e'), Some(LetterScore::Match));
        assert_eq!(board.score_for(b'z'), None);
    }

    #[test]
    fn board_never_downgrades_a_match() {
        let target = word("apple");
        // "angle" scores 'l' as match at position 3; "lorry" then sees 'l'
        // at position 0, which would be a mere mismatch.
        let board = LetterBoard::from_history(&[word("angle"), word("lorry")], &target);
        assert_eq!(board.score_for(b'l'), Some(LetterScore::Match));
    }

    #[test]
    fn board_latest_score_wins_below_match() {
        let target = word("apple");
        // 'p' in "pound" is a mismatch; in "spore" position 1 it is a match
        let board = LetterBoard::from_history(&[word("pound")], &target);
        assert_eq!(board.score_for(b'p'), Some(LetterScore::Mismatch));

        let board = LetterBoard::from_history(&[word("pound"), word("spare")], &target);
        assert_eq!(board.score_for(b'p'), Some(LetterScore::Match));
    }

    #[test]
    fn board_empty_history() {
        let target = word("apple");
        let board = LetterBoard::from_history(&[], &target);
        assert!(board.is_empty());
    }
}
