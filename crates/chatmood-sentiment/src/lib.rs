//! Lexicon-driven sentiment and emotion scoring for chat messages.
//!
//! Two independent scorers share the crate. [`PolarityLexicon`] implements
//! rule-based polarity in the VADER style: token valences adjusted by
//! negation, boosters, capitalization, idioms, and punctuation, summed
//! into a normalized compound score. [`EmotionLexicon`] counts NRC-style
//! category associations per word. Callers compose them per message and
//! fold results into a [`ScoreTally`].
//!
//! Both scorers are pure lookups once loaded: no network, no persistence,
//! no global state.

pub mod aggregate;
pub mod emotion;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod polarity;
pub mod tokenize;

pub use aggregate::{ScoreTally, TallySummary};
pub use emotion::EmotionLexicon;
pub use error::LexiconError;
pub use lexicon::PolarityLexicon;
