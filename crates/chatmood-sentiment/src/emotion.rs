//! Emotion lexicon in the NRC word-association format, and its scorer.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chatmood_core::{EmotionCategory, EmotionFlags, EmotionScores};

use crate::error::LexiconError;

/// Immutable word-to-category association table.
///
/// Each known word carries a set of [`EmotionCategory`] flags. A lookup
/// miss means the word is unscored, which is different from a word known
/// to carry no associations.
#[derive(Debug, Clone, Default)]
pub struct EmotionLexicon {
    entries: HashMap<String, EmotionFlags>,
}

impl EmotionLexicon {
    /// Load associations from a `word<TAB>category<TAB>0|1` file, one
    /// association per line. Only flag-1 lines with a known category are
    /// kept; a word accumulates flags across its lines. Words and category
    /// names are matched case-insensitively.
    ///
    /// # Errors
    /// Returns [`LexiconError::Io`] when the file cannot be opened or read,
    /// and [`LexiconError::Empty`] when no line yields an association.
    pub fn load(path: &Path) -> Result<EmotionLexicon, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut entries: HashMap<String, EmotionFlags> = HashMap::new();
        let mut associations = 0_u64;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| LexiconError::Io {
                path: path.display().to_string(),
                source,
            })?;
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let (word, category_name, flag) =
                match (fields.next(), fields.next(), fields.next()) {
                    (Some(word), Some(category), Some(flag)) => (word, category, flag),
                    _ => continue,
                };
            if flag.trim().parse::<u8>().unwrap_or(0) != 1 {
                continue;
            }
            let category = match EmotionCategory::from_name(category_name.trim()) {
                Some(category) => category,
                None => continue,
            };

            entries.entry(word.to_lowercase()).or_default().set(category);
            associations += 1;
        }

        if entries.is_empty() {
            return Err(LexiconError::Empty {
                path: path.display().to_string(),
            });
        }
        tracing::debug!(
            path = %path.display(),
            words = entries.len(),
            associations,
            "emotion lexicon loaded"
        );
        Ok(EmotionLexicon { entries })
    }

    /// Build a lexicon from in-memory entries. Useful for tests and small
    /// custom vocabularies.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> EmotionLexicon
    where
        I: IntoIterator<Item = (S, EmotionFlags)>,
        S: Into<String>,
    {
        EmotionLexicon {
            entries: entries
                .into_iter()
                .map(|(word, flags)| (word.into().to_lowercase(), flags))
                .collect(),
        }
    }

    /// Association flags for `word`, looked up case-insensitively.
    #[must_use]
    pub fn flags(&self, word: &str) -> Option<EmotionFlags> {
        self.entries.get(&word.to_lowercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count one association per set flag for every known word in `words`.
    /// A token tagged with three categories contributes three.
    #[must_use]
    pub fn score_words<S: AsRef<str>>(&self, words: &[S]) -> EmotionScores {
        let mut scores = EmotionScores::default();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if let Some(flags) = self.flags(word) {
                for category in flags.iter() {
                    scores.add(category, 1.0);
                }
            }
        }
        scores
    }
}
