//! Single-integer high-score persistence.
//!
//! File format: one line holding a decimal non-negative integer. Anything else
//! reads as 0. Failures never reach the player; they are logged and dropped.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the best score lives between runs.
pub trait HighScoreStore {
    /// Stored value, or 0 when nothing usable is stored.
    fn load(&self) -> u32;
    /// Best-effort overwrite.
    fn save(&mut self, value: u32);
}

/// High score kept in a plain text file.
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read. Errors on a missing file or unparsable content.
    pub fn read(&self) -> io::Result<u32> {
        let content = fs::read_to_string(&self.path)?;
        let first_line = content.lines().next().unwrap_or("");
        first_line
            .trim()
            .parse::<u32>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Strict write.
    pub fn write(&self, value: u32) -> io::Result<()> {
        fs::write(&self.path, value.to_string())
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(value) => value,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No high score file at {}", self.path.display());
                0
            }
            Err(e) => {
                warn!("High score read error ({}): {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, value: u32) {
        if let Err(e) = self.write(value) {
            warn!("High score write error ({}): {}", self.path.display(), e);
        }
    }
}

/// In-memory store for headless runs and tests. Records every save.
#[derive(Debug, Default, Clone)]
pub struct MemoryHighScore {
    pub value: u32,
    pub saves: Vec<u32>,
}

impl MemoryHighScore {
    pub fn with_value(value: u32) -> Self {
        Self {
            value,
            saves: Vec::new(),
        }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, value: u32) {
        self.value = value;
        self.saves.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> HighScoreFile {
        HighScoreFile::new(dir.path().join("highscore.txt"))
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        for n in [0, 1, 42, 9999, u32::MAX] {
            store.save(n);
            assert_eq!(store.load(), n);
        }
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load(), 0);
        assert_eq!(store.read().unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_written_as_plain_decimal() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save(17);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "17");
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "  23 \n").unwrap();
        assert_eq!(store.load(), 23);
    }

    #[test]
    fn test_garbage_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        for content in ["", "abc", "-5", "12abc", "3.5"] {
            fs::write(store.path(), content).unwrap();
            assert_eq!(store.load(), 0, "content {:?}", content);
        }
    }

    #[test]
    fn test_only_first_line_counts() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "8\n99\n").unwrap();
        assert_eq!(store.load(), 8);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory doesn't exist, so the write fails
        let mut store = HighScoreFile::new(dir.path().join("missing").join("highscore.txt"));
        store.save(5);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_memory_store_records_saves() {
        let mut store = MemoryHighScore::with_value(3);
        assert_eq!(store.load(), 3);
        store.save(7);
        assert_eq!(store.load(), 7);
        assert_eq!(store.saves, vec![7]);
    }
}
