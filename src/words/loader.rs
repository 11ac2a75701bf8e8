//! File-backed word source

use std::fs;
use std::path::{Path, PathBuf};

use super::{SourceError, WordSource};

/// Word source reading newline-separated words from a local file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn candidates(&self) -> Result<Vec<String>, SourceError> {
        read_lines(&self.path)
    }
}

/// Read the non-empty lines of a word file
///
/// # Errors
/// Returns [`SourceError::Unavailable`] if the file cannot be read.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SourceError> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        SourceError::Unavailable(format!("{}: {e}", path.as_ref().display()))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_lines_skipping_blanks() {
        let mut file = tempfile_path("words_ok.txt");
        writeln!(file.1, "apple\n\n  crane  \nzz").unwrap();

        let lines = read_lines(&file.0).unwrap();
        assert_eq!(lines, vec!["apple", "crane", "zz"]);

        let _ = fs::remove_file(&file.0);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let result = read_lines("definitely/not/a/real/path.txt");
        assert!(matches!(result, Err(SourceError::Unavailable(_))));
    }

    fn tempfile_path(name: &str) -> (PathBuf, fs::File) {
        let path = std::env::temp_dir().join(name);
        let file = fs::File::create(&path).unwrap();
        (path, file)
    }
}
