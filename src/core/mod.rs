//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear semantics.

mod feedback;
mod word;

pub use feedback::{LetterBoard, LetterScore, classify, score_row};
pub use word::{Word, WordError};

/// Length of every target word and submitted guess
pub const WORD_LEN: usize = 5;
