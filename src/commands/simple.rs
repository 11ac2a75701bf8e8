//! Simple line-mode game
//!
//! Text-based game loop without TUI: type a full five-letter guess per
//! line and read the colored feedback.

use std::io::{self, Write};
use std::time::Duration;

use indicatif::ProgressBar;

use crate::core::WORD_LEN;
use crate::game::{GameEvent, GameState, Rules, Status};
use crate::output::{print_outcome, print_progress};
use crate::words::{SourceSpec, draw_target};

/// How a round of guessing ended
enum RoundOutcome {
    /// Player finished the word (won or gave up)
    Finished,
    /// Player asked for a fresh word mid-game
    NewWord,
    /// Player quit
    Quit,
}

/// Run the line-mode game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(rules: Rules, spec: &SourceSpec) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      W O R D   S L O T                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five letter word. After each guess you'll see:");
    println!("  - green   letter in the correct position");
    println!("  - yellow  letter in the word, wrong position");
    println!("  - gray    letter not in the word\n");
    println!(
        "You have {} tries. Commands: 'quit' to exit, 'new' for a new word, \
         'giveup' to reveal (after {} tries)\n",
        rules.max_guesses, rules.give_up_after
    );

    let mut state = GameState::new(rules);

    loop {
        // Word acquisition: stay in the no-word state until a fetch lands
        state = state.apply(GameEvent::NewGame);
        let generation = state.generation();

        let spinner = ProgressBar::new_spinner();
        spinner.set_message("fetching a word...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        let drawn = draw_target(spec.build().as_ref(), &mut rand::rng());
        spinner.finish_and_clear();

        match drawn {
            Ok(word) => {
                state = state.apply(GameEvent::TargetResolved { generation, word });
            }
            Err(e) => {
                println!("😞 {e}");
                match get_user_input("Try again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => continue,
                    _ => break,
                }
            }
        }

        println!("Guess the five letter word!\n");
        let (next, outcome) = play_rounds(state)?;
        state = next;

        match outcome {
            RoundOutcome::Quit => break,
            RoundOutcome::NewWord => {
                println!("\n🔄 Fetching a new word...\n");
            }
            RoundOutcome::Finished => {
                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => println!("\n🔄 New game!\n"),
                    _ => break,
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Guessing loop for one word
fn play_rounds(mut state: GameState) -> Result<(GameState, RoundOutcome), String> {
    loop {
        let turn = state.attempts() + 1;
        let input = get_user_input(&format!("Guess {turn}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => return Ok((state, RoundOutcome::Quit)),
            "new" | "n" => return Ok((state, RoundOutcome::NewWord)),
            "giveup" | "give" => {
                if state.can_give_up() {
                    state = state.apply(GameEvent::GiveUp);
                } else {
                    println!(
                        "Not yet — giving up unlocks after {} tries.\n",
                        state.rules().give_up_after
                    );
                    continue;
                }
            }
            guess if guess.len() == WORD_LEN && guess.bytes().all(|b| b.is_ascii_alphabetic()) => {
                state = submit_guess(state, guess);
                if state.status() == Status::Guessing {
                    print_progress(&state);
                }
            }
            _ => {
                println!("❌ A guess is exactly {WORD_LEN} letters a-z.\n");
                continue;
            }
        }

        if state.is_over() {
            print_outcome(&state);
            return Ok((state, RoundOutcome::Finished));
        }
    }
}

/// Feed a validated guess through the state machine, letter by letter
fn submit_guess(state: GameState, guess: &str) -> GameState {
    let mut state = state;
    for c in guess.chars() {
        state = state.apply(GameEvent::Letter(c));
    }
    state.apply(GameEvent::Submit)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
