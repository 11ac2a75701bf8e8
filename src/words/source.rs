//! The word-source seam and target selection

use std::fmt;
use std::path::PathBuf;

use rand::Rng;

use crate::core::Word;

use super::{BuiltinSource, FileSource, HttpSource};

/// Anything that can produce candidate words
///
/// Implementations return raw strings; eligibility filtering happens in
/// [`draw_target`], so sources never need to validate what they yield.
pub trait WordSource {
    /// Produce zero or more candidate strings
    ///
    /// # Errors
    /// Returns [`SourceError::Unavailable`] when the source cannot be read.
    fn candidates(&self) -> Result<Vec<String>, SourceError>;
}

/// Error type for word acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not be reached or read
    Unavailable(String),
    /// The source produced no 5-letter alphabetic candidates
    NoEligibleWords,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(detail) => write!(f, "word source unavailable: {detail}"),
            Self::NoEligibleWords => write!(f, "no word found, try again"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Which word source to use, as selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// Fetch candidates from an HTTP endpoint
    Web { url: String },
    /// Use the built-in embedded list
    Offline,
    /// Read newline-separated words from a file
    File(PathBuf),
}

impl SourceSpec {
    /// Interpret the `--source` flag: `web`, `offline`, or a file path
    #[must_use]
    pub fn parse(mode: &str, url: &str) -> Self {
        match mode {
            "web" => Self::Web {
                url: url.to_string(),
            },
            "offline" => Self::Offline,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Open the source this spec describes
    #[must_use]
    pub fn build(&self) -> Box<dyn WordSource + Send> {
        match self {
            Self::Web { url } => Box::new(HttpSource::new(url.clone())),
            Self::Offline => Box::new(BuiltinSource),
            Self::File(path) => Box::new(FileSource::new(path.clone())),
        }
    }
}

/// Draw a target word from a source
///
/// Filters the candidates to eligible words (exactly 5 alphabetic
/// characters, case-insensitively; the survivors are normalized to
/// lowercase) and picks one uniformly at random.
///
/// # Errors
/// Propagates source failures; returns [`SourceError::NoEligibleWords`]
/// when nothing survives the filter.
pub fn draw_target<R: Rng + ?Sized>(
    source: &dyn WordSource,
    rng: &mut R,
) -> Result<Word, SourceError> {
    let mut eligible: Vec<Word> = source
        .candidates()?
        .iter()
        .filter_map(|candidate| Word::new(candidate).ok())
        .collect();

    if eligible.is_empty() {
        return Err(SourceError::NoEligibleWords);
    }

    let index = rng.random_range(0..eligible.len());
    Ok(eligible.swap_remove(index))
}
