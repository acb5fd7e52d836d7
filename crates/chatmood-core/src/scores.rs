use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::emotion::EmotionCategory;

/// Polarity result for a single text, in the VADER output shape.
///
/// `neg`, `neu`, and `pos` are proportions in `[0, 1]` rounded to three
/// decimals; `compound` is the normalized overall valence in `[-1, 1]`
/// rounded to four decimals. A text with no scorable content is all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Per-category emotion association counts for a text.
///
/// Serializes as a map keyed by category name, in category order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmotionScores {
    counts: [f64; EmotionCategory::COUNT],
}

impl EmotionScores {
    #[must_use]
    pub fn get(&self, category: EmotionCategory) -> f64 {
        self.counts[category.index()]
    }

    pub fn add(&mut self, category: EmotionCategory, amount: f64) {
        self.counts[category.index()] += amount;
    }

    /// Element-wise sum with another score vector.
    pub fn accumulate(&mut self, other: &EmotionScores) {
        for category in EmotionCategory::ALL {
            self.counts[category.index()] += other.counts[category.index()];
        }
    }

    /// Sum over all categories.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&count| count == 0.0)
    }

    /// Per-category values in [`EmotionCategory::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, f64)> + '_ {
        EmotionCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

impl Serialize for EmotionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(EmotionCategory::COUNT))?;
        for (category, value) in self.iter() {
            map.serialize_entry(category.name(), &value)?;
        }
        map.end()
    }
}
