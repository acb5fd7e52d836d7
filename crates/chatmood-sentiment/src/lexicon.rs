//! Polarity lexicon: word to mean-valence table in the VADER file format.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LexiconError;

/// Immutable word-to-valence table.
///
/// Valences are mean human ratings, roughly `-4` (extremely negative) to
/// `+4` (extremely positive). Lookups are case-insensitive; a miss means
/// the word carries no polarity of its own.
#[derive(Debug, Clone, Default)]
pub struct PolarityLexicon {
    entries: HashMap<String, f64>,
}

impl PolarityLexicon {
    /// Load a lexicon from a `word<ws>valence[<ws>extra...]` file, one entry
    /// per line. Lines without a parseable word and valence are skipped;
    /// fields past the valence (stddev, raw ratings) are ignored. Later
    /// entries for the same word win.
    ///
    /// # Errors
    /// Returns [`LexiconError::Io`] when the file cannot be opened or read,
    /// and [`LexiconError::Empty`] when no line yields a usable entry.
    pub fn load(path: &Path) -> Result<PolarityLexicon, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut entries = HashMap::new();
        let mut skipped = 0_u64;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| LexiconError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some(word), Some(raw_valence)) => match raw_valence.parse::<f64>() {
                    Ok(valence) => {
                        entries.insert(word.to_lowercase(), valence);
                    }
                    Err(_) => skipped += 1,
                },
                _ => {
                    if !line.trim().is_empty() {
                        skipped += 1;
                    }
                }
            }
        }

        if entries.is_empty() {
            return Err(LexiconError::Empty {
                path: path.display().to_string(),
            });
        }
        if skipped > 0 {
            tracing::warn!(path = %path.display(), skipped, "skipped malformed lexicon lines");
        }
        tracing::debug!(path = %path.display(), words = entries.len(), "polarity lexicon loaded");
        Ok(PolarityLexicon { entries })
    }

    /// Build a lexicon from in-memory entries. Useful for tests and for
    /// embedding small custom vocabularies.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> PolarityLexicon
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        PolarityLexicon {
            entries: entries
                .into_iter()
                .map(|(word, valence)| (word.into().to_lowercase(), valence))
                .collect(),
        }
    }

    /// Base valence for `word`, if the lexicon knows it.
    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.entries.get(&word.to_lowercase()).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
