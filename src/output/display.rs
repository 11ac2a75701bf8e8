//! Display functions for the line-mode game

use colored::Colorize;

use crate::game::{GameState, Status};

use super::formatters::{colored_row, definition_url, letter_strip, row_squares};

/// Print the feedback for the latest guess plus the letter hint strip
pub fn print_progress(state: &GameState) {
    let Some(target) = state.target() else {
        return;
    };
    let Some(guess) = state.guesses().last() else {
        return;
    };

    println!("\n  {}", colored_row(guess, target));

    if let Some(board) = state.letter_board() {
        println!("\n  {}\n", letter_strip(&board));
    }
}

/// Print the end-of-game banner with the full guess history
pub fn print_outcome(state: &GameState) {
    let Some(target) = state.target() else {
        return;
    };

    match state.status() {
        Status::Won => {
            let attempts = state.attempts();
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!(
                    "  Congratulations! It took you {attempts} {}.",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        Status::GaveUp => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!(
                    "  The word was {} — better luck next time.",
                    target.text().to_uppercase()
                )
                .yellow()
                .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        _ => return,
    }

    println!("\n  Guess history:");
    for (i, guess) in state.guesses().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.text().to_uppercase().bright_white().bold(),
            row_squares(guess, target)
        );
    }

    if state.status() == Status::Won {
        println!(
            "\n  definition: {}",
            definition_url(target).bright_blue().underline()
        );
    }
    println!();
}
