//! Word Slot
//!
//! A terminal word-guessing game: guess the five-letter word and get
//! per-letter feedback after every try.
//!
//! # Quick Start
//!
//! ```rust
//! use word_slot::core::{LetterScore, Word, classify};
//!
//! let target = Word::new("apple").unwrap();
//! assert_eq!(classify(0, "angle", Some(&target)), Some(LetterScore::Match));
//! assert_eq!(classify(1, "angle", Some(&target)), Some(LetterScore::Unmatch));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word sources
pub mod words;

// Background word fetching
pub mod fetch;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
