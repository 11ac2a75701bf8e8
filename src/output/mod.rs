//! Terminal output formatting
//!
//! Display utilities shared by the line-mode game.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_progress};
pub use formatters::{colored_row, definition_url, letter_strip, row_squares};
