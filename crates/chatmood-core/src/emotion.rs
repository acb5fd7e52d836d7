use serde::{Deserialize, Serialize};

/// The ten emotion-association categories, in the fixed order used by
/// lexicon files, score vectors, and report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
    Trust,
    Negative,
    Positive,
}

impl EmotionCategory {
    pub const COUNT: usize = 10;

    pub const ALL: [EmotionCategory; EmotionCategory::COUNT] = [
        EmotionCategory::Anger,
        EmotionCategory::Anticipation,
        EmotionCategory::Disgust,
        EmotionCategory::Fear,
        EmotionCategory::Joy,
        EmotionCategory::Sadness,
        EmotionCategory::Surprise,
        EmotionCategory::Trust,
        EmotionCategory::Negative,
        EmotionCategory::Positive,
    ];

    /// Position of this category in [`EmotionCategory::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EmotionCategory::Anger => "anger",
            EmotionCategory::Anticipation => "anticipation",
            EmotionCategory::Disgust => "disgust",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Joy => "joy",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Surprise => "surprise",
            EmotionCategory::Trust => "trust",
            EmotionCategory::Negative => "negative",
            EmotionCategory::Positive => "positive",
        }
    }

    /// Case-insensitive lookup by category name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<EmotionCategory> {
        EmotionCategory::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-word category membership, one bit per [`EmotionCategory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionFlags(u16);

impl EmotionFlags {
    #[must_use]
    pub const fn empty() -> EmotionFlags {
        EmotionFlags(0)
    }

    #[must_use]
    pub fn from_categories(categories: &[EmotionCategory]) -> EmotionFlags {
        let mut flags = EmotionFlags::empty();
        for &category in categories {
            flags.set(category);
        }
        flags
    }

    pub fn set(&mut self, category: EmotionCategory) {
        self.0 |= 1 << category.index();
    }

    #[must_use]
    pub fn contains(self, category: EmotionCategory) -> bool {
        self.0 & (1 << category.index()) != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of categories set.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Set categories, in [`EmotionCategory::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = EmotionCategory> {
        EmotionCategory::ALL
            .into_iter()
            .filter(move |category| self.contains(*category))
    }
}
