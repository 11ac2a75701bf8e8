//! Built-in word list
//!
//! A fallback list compiled into the binary at build time, for playing
//! without network access.

use super::{SourceError, WordSource};

// Include the generated word list from the build script
include!(concat!(env!("OUT_DIR"), "/fallback.rs"));

/// Word source backed by the embedded list
pub struct BuiltinSource;

impl WordSource for BuiltinSource {
    fn candidates(&self) -> Result<Vec<String>, SourceError> {
        Ok(FALLBACK.iter().map(|word| (*word).to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_yields_every_word() {
        let candidates = BuiltinSource.candidates().unwrap();
        assert_eq!(candidates.len(), FALLBACK_COUNT);
    }
}
