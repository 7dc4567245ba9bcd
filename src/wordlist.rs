use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Path of the wordlist shipped with the crate, anchored at the manifest
/// directory. A 2048-word indexed list in diceware format.
pub const DEFAULT_WORDLIST_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/assets/wordlist.txt");

/// Lazily-loaded, process-lifetime wordlist.
///
/// The file is read and parsed at most once; concurrent callers during the
/// first load block until the cache is populated and then observe the same
/// cached slice. The cache is an explicit value rather than module-level
/// state so tests and embedders can supply their own instance.
#[derive(Debug)]
pub struct WordlistCache {
    path: PathBuf,
    words: OnceCell<Vec<String>>,
}

impl Default for WordlistCache {
    fn default() -> Self {
        Self::new(DEFAULT_WORDLIST_PATH)
    }
}

impl WordlistCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            words: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached wordlist, reading and parsing the file on first use.
    ///
    /// Lines may carry an optional leading index token (die rolls in diceware
    /// lists); only the last whitespace-separated token is kept. Blank lines
    /// are skipped and every retained word is NFC-normalized.
    pub fn load(&self) -> Result<&[String]> {
        self.words
            .get_or_try_init(|| read_wordlist(&self.path))
            .map(Vec::as_slice)
    }
}

fn read_wordlist(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;

    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let Some(word) = line.split_whitespace().last() else {
            continue;
        };
        words.push(word.nfc().collect());
    }

    if words.is_empty() {
        return Err(Error::InvalidState(format!(
            "wordlist at {} contains no words",
            path.display()
        )));
    }

    Ok(words)
}
