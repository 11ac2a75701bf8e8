//! HTTP word source
//!
//! Fetches candidate words from an endpoint that returns either a JSON
//! array of strings or a short text from which words are extracted.

use std::time::Duration;

use super::{SourceError, WordSource};

/// Default endpoint: a batch of random words per request
pub const DEFAULT_WORD_API: &str = "https://random-word-api.herokuapp.com/word?number=30";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Word source backed by an HTTP endpoint
pub struct HttpSource {
    agent: ureq::Agent,
    url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
        Self {
            agent,
            url: url.into(),
        }
    }
}

impl WordSource for HttpSource {
    fn candidates(&self) -> Result<Vec<String>, SourceError> {
        let body = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?
            .into_string()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        Ok(extract_candidates(&body))
    }
}

/// Pull candidate words out of a response body
///
/// A JSON array of strings is taken as-is; anything else is treated as
/// plain text and split into alphabetic runs.
fn extract_candidates(body: &str) -> Vec<String> {
    if let Ok(words) = serde_json::from_str::<Vec<String>>(body.trim()) {
        return words;
    }

    body.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|run| !run.is_empty())
        .map(str::to_string)
        .collect()
}
