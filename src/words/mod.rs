//! Word sources
//!
//! Target words come from an external collaborator that produces zero or
//! more candidate strings: an HTTP endpoint, a local file, or the built-in
//! list compiled in at build time. Candidates are filtered to 5-letter
//! alphabetic words and one is drawn uniformly at random.

mod builtin;
mod http;
pub mod loader;
mod source;

pub use builtin::{BuiltinSource, FALLBACK, FALLBACK_COUNT};
pub use http::{DEFAULT_WORD_API, HttpSource};
pub use loader::FileSource;
pub use source::{SourceError, SourceSpec, WordSource, draw_target};
