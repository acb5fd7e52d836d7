//! Aggregation of per-message scores across a run.
//!
//! Callers own one [`ScoreTally`] per scope (a sender, a conversation, a
//! whole export) and merge tallies at the end. There is no process-wide
//! state to reset between runs.

use serde::Serialize;

use chatmood_core::{EmotionScores, PolarityScores};

/// Running sums of polarity and emotion scores.
#[derive(Debug, Clone, Default)]
pub struct ScoreTally {
    messages: u64,
    pos_sum: f64,
    neg_sum: f64,
    neu_sum: f64,
    compound_sum: f64,
    emotion_sums: EmotionScores,
    tagged_tokens: i64,
}

/// Point-in-time snapshot of a tally, shaped for reporting.
///
/// Means are `None` when the tally saw no messages; the emotion profile is
/// `None` when no token carried an association.
#[derive(Debug, Clone, Serialize)]
pub struct TallySummary {
    pub messages: u64,
    pub mean_pos: Option<f64>,
    pub mean_neg: Option<f64>,
    pub mean_neu: Option<f64>,
    pub mean_compound: Option<f64>,
    pub emotion_profile: Option<EmotionScores>,
    pub tagged_tokens: i64,
}

impl ScoreTally {
    #[must_use]
    pub fn new() -> ScoreTally {
        ScoreTally::default()
    }

    /// Fold one message's polarity scores into the tally.
    pub fn record_polarity(&mut self, scores: &PolarityScores) {
        self.messages += 1;
        self.pos_sum += scores.pos;
        self.neg_sum += scores.neg;
        self.neu_sum += scores.neu;
        self.compound_sum += scores.compound;
    }

    /// Fold one message's emotion scores into the tally. The message's
    /// association total is truncated toward zero before counting.
    pub fn record_emotions(&mut self, scores: &EmotionScores) {
        self.emotion_sums.accumulate(scores);
        #[allow(clippy::cast_possible_truncation)]
        let tagged = scores.total() as i64;
        self.tagged_tokens += tagged;
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: &ScoreTally) {
        self.messages += other.messages;
        self.pos_sum += other.pos_sum;
        self.neg_sum += other.neg_sum;
        self.neu_sum += other.neu_sum;
        self.compound_sum += other.compound_sum;
        self.emotion_sums.accumulate(&other.emotion_sums);
        self.tagged_tokens += other.tagged_tokens;
    }

    #[must_use]
    pub fn messages(&self) -> u64 {
        self.messages
    }

    #[must_use]
    pub fn tagged_tokens(&self) -> i64 {
        self.tagged_tokens
    }

    #[must_use]
    pub fn mean_pos(&self) -> Option<f64> {
        self.mean_of(self.pos_sum)
    }

    #[must_use]
    pub fn mean_neg(&self) -> Option<f64> {
        self.mean_of(self.neg_sum)
    }

    #[must_use]
    pub fn mean_neu(&self) -> Option<f64> {
        self.mean_of(self.neu_sum)
    }

    #[must_use]
    pub fn mean_compound(&self) -> Option<f64> {
        self.mean_of(self.compound_sum)
    }

    /// Share of associations per category among all counted associations.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn emotion_profile(&self) -> Option<EmotionScores> {
        if self.tagged_tokens <= 0 {
            return None;
        }
        let denominator = self.tagged_tokens as f64;
        let mut profile = EmotionScores::default();
        for (category, sum) in self.emotion_sums.iter() {
            profile.add(category, sum / denominator);
        }
        Some(profile)
    }

    #[must_use]
    pub fn summary(&self) -> TallySummary {
        TallySummary {
            messages: self.messages,
            mean_pos: self.mean_pos(),
            mean_neg: self.mean_neg(),
            mean_neu: self.mean_neu(),
            mean_compound: self.mean_compound(),
            emotion_profile: self.emotion_profile(),
            tagged_tokens: self.tagged_tokens,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean_of(&self, sum: f64) -> Option<f64> {
        if self.messages == 0 {
            return None;
        }
        Some(sum / self.messages as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmood_core::EmotionCategory;

    fn polarity(neg: f64, neu: f64, pos: f64, compound: f64) -> PolarityScores {
        PolarityScores {
            neg,
            neu,
            pos,
            compound,
        }
    }

    #[test]
    fn empty_tally_has_no_means() {
        let tally = ScoreTally::new();
        assert_eq!(tally.messages(), 0);
        assert_eq!(tally.mean_compound(), None);
        assert_eq!(tally.emotion_profile(), None);
    }

    #[test]
    fn means_average_over_recorded_messages() {
        let mut tally = ScoreTally::new();
        tally.record_polarity(&polarity(0.0, 0.0, 1.0, 0.75));
        tally.record_polarity(&polarity(0.5, 0.5, 0.0, -0.25));

        assert_eq!(tally.messages(), 2);
        assert_eq!(tally.mean_pos(), Some(0.5));
        assert_eq!(tally.mean_neg(), Some(0.25));
        assert_eq!(tally.mean_compound(), Some(0.25));
    }

    #[test]
    fn tagged_tokens_count_associations_not_words() {
        let mut tally = ScoreTally::new();
        let mut scores = EmotionScores::default();
        scores.add(EmotionCategory::Fear, 1.0);
        scores.add(EmotionCategory::Negative, 1.0);
        scores.add(EmotionCategory::Sadness, 1.0);
        tally.record_emotions(&scores);

        // One word with three flags counts three.
        assert_eq!(tally.tagged_tokens(), 3);
    }

    #[test]
    fn emotion_profile_is_share_of_associations() {
        let mut tally = ScoreTally::new();
        let mut scores = EmotionScores::default();
        scores.add(EmotionCategory::Joy, 3.0);
        scores.add(EmotionCategory::Trust, 1.0);
        tally.record_emotions(&scores);

        let profile = tally.emotion_profile().unwrap();
        assert_eq!(profile.get(EmotionCategory::Joy), 0.75);
        assert_eq!(profile.get(EmotionCategory::Trust), 0.25);
        assert_eq!(profile.get(EmotionCategory::Anger), 0.0);
    }

    #[test]
    fn merge_combines_counts_and_sums() {
        let mut left = ScoreTally::new();
        left.record_polarity(&polarity(0.0, 0.0, 1.0, 0.25));
        let mut left_emotions = EmotionScores::default();
        left_emotions.add(EmotionCategory::Joy, 1.0);
        left.record_emotions(&left_emotions);

        let mut right = ScoreTally::new();
        right.record_polarity(&polarity(1.0, 0.0, 0.0, -0.75));
        let mut right_emotions = EmotionScores::default();
        right_emotions.add(EmotionCategory::Joy, 1.0);
        right_emotions.add(EmotionCategory::Anger, 2.0);
        right.record_emotions(&right_emotions);

        left.merge(&right);
        assert_eq!(left.messages(), 2);
        assert_eq!(left.mean_compound(), Some(-0.25));
        assert_eq!(left.tagged_tokens(), 4);

        let profile = left.emotion_profile().unwrap();
        assert_eq!(profile.get(EmotionCategory::Joy), 0.5);
        assert_eq!(profile.get(EmotionCategory::Anger), 0.5);
    }

    #[test]
    fn independent_tallies_do_not_interact() {
        let mut first = ScoreTally::new();
        first.record_polarity(&polarity(0.0, 0.0, 1.0, 0.9));

        let second = ScoreTally::new();
        assert_eq!(second.messages(), 0);
        assert_eq!(first.messages(), 1);
    }

    #[test]
    fn summary_mirrors_accessors() {
        let mut tally = ScoreTally::new();
        tally.record_polarity(&polarity(0.1, 0.2, 0.7, 0.25));
        let mut scores = EmotionScores::default();
        scores.add(EmotionCategory::Positive, 2.0);
        tally.record_emotions(&scores);

        let summary = tally.summary();
        assert_eq!(summary.messages, 1);
        assert_eq!(summary.mean_compound, Some(0.25));
        assert_eq!(summary.tagged_tokens, 2);
        assert!(summary.emotion_profile.is_some());
    }

    #[test]
    fn empty_summary_serializes_means_as_null() {
        let summary = ScoreTally::new().summary();
        let value = serde_json::to_value(summary).unwrap();

        assert_eq!(value["messages"], 0);
        assert!(value["mean_compound"].is_null());
        assert!(value["emotion_profile"].is_null());
    }
}
