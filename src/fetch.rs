//! Background word fetching
//!
//! The TUI never blocks on the network: each fetch runs on its own thread
//! and reports back over a channel. Outcomes are tagged with the game
//! generation they were requested for, so a fetch that outlives its game
//! (the player hit new-game again) is discarded instead of clobbering
//! fresher state.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::core::Word;
use crate::words::{SourceError, SourceSpec, draw_target};

/// Result of one background fetch, tagged with its generation
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Word, SourceError>,
}

/// Hands fetch requests to worker threads and collects their outcomes
pub struct Fetcher {
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl Fetcher {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Start a fetch for the given generation
    ///
    /// Returns immediately; the outcome arrives via [`Fetcher::poll`].
    pub fn request(&self, spec: SourceSpec, generation: u64) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let source = spec.build();
            let result = draw_target(source.as_ref(), &mut rand::rng());
            // The receiver may be gone if the app quit; nothing to do then
            let _ = tx.send(FetchOutcome { generation, result });
        });
    }

    /// Take the next finished outcome, if any
    ///
    /// Non-blocking; the event loop calls this every tick.
    #[must_use]
    pub fn poll(&self) -> Option<FetchOutcome> {
        self.rx.try_recv().ok()
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn offline_fetch_delivers_a_word() {
        let fetcher = Fetcher::new();
        fetcher.request(SourceSpec::Offline, 3);

        let outcome = fetcher
            .rx
            .recv_timeout(Duration::from_secs(5))
            .expect("fetch should finish");
        assert_eq!(outcome.generation, 3);
        assert_eq!(outcome.result.unwrap().text().len(), 5);
    }

    #[test]
    fn poll_is_non_blocking() {
        let fetcher = Fetcher::new();
        assert!(fetcher.poll().is_none());
    }
}
