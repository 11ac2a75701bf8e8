//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::{LetterBoard, LetterScore, Word, score_row};

/// Format a guess against the target as emoji squares
#[must_use]
pub fn row_squares(guess: &Word, target: &Word) -> String {
    score_row(guess.text(), Some(target))
        .iter()
        .map(|score| match score {
            Some(LetterScore::Match) => '🟩',
            Some(LetterScore::Mismatch) => '🟨',
            _ => '⬜',
        })
        .collect()
}

/// Format a guess as colored uppercase letters
#[must_use]
pub fn colored_row(guess: &Word, target: &Word) -> String {
    let row = score_row(guess.text(), Some(target));

    guess
        .text()
        .chars()
        .zip(row.iter())
        .map(|(c, score)| {
            let cell = format!(" {} ", c.to_ascii_uppercase());
            match score {
                Some(LetterScore::Match) => cell.black().on_green().to_string(),
                Some(LetterScore::Mismatch) => cell.black().on_yellow().to_string(),
                _ => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Format the a-z hint strip from the letter board
///
/// Matched letters show green, misplaced yellow, absent dimmed, and
/// unguessed letters plain.
#[must_use]
pub fn letter_strip(board: &LetterBoard) -> String {
    (b'a'..=b'z')
        .map(|letter| {
            let shown = (letter as char).to_ascii_uppercase().to_string();
            match board.score_for(letter) {
                Some(LetterScore::Match) => shown.black().on_green().to_string(),
                Some(LetterScore::Mismatch) => shown.black().on_yellow().to_string(),
                Some(LetterScore::Unmatch) => shown.bright_black().to_string(),
                None => shown,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dictionary link for the solved word
#[must_use]
pub fn definition_url(word: &Word) -> String {
    format!("https://www.thefreedictionary.com/{word}")
}
