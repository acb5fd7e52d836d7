//! `summary` subcommand: per-sender aggregates in one JSON report.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use chatmood_core::{AppConfig, Message};
use chatmood_sentiment::{EmotionLexicon, PolarityLexicon, ScoreTally, TallySummary};

use crate::InputArgs;

#[derive(Debug, Serialize)]
struct SummaryReport {
    overall: TallySummary,
    senders: BTreeMap<String, TallySummary>,
}

pub(crate) fn run(config: &AppConfig, args: &InputArgs) -> anyhow::Result<()> {
    let (polarity, emotion) = crate::load_lexicons(config)?;
    let messages = crate::input::read_messages(args.input.as_deref(), args.format)?;

    let report = build_report(&polarity, &emotion, &messages);
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write report")?;
    tracing::info!(
        messages = messages.len(),
        senders = report.senders.len(),
        "summary complete"
    );
    Ok(())
}

fn build_report(
    polarity: &PolarityLexicon,
    emotion: &EmotionLexicon,
    messages: &[Message],
) -> SummaryReport {
    let mut senders: BTreeMap<String, ScoreTally> = BTreeMap::new();
    for message in messages {
        let (polarity_scores, emotion_scores) = crate::score_text(polarity, emotion, &message.text);
        let tally = senders.entry(message.sender.clone()).or_default();
        tally.record_polarity(&polarity_scores);
        tally.record_emotions(&emotion_scores);
    }

    let mut overall = ScoreTally::new();
    for tally in senders.values() {
        overall.merge(tally);
    }

    SummaryReport {
        overall: overall.summary(),
        senders: senders
            .into_iter()
            .map(|(sender, tally)| (sender, tally.summary()))
            .collect(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use chatmood_core::{EmotionCategory, EmotionFlags};

    use super::*;

    fn lexicons() -> (PolarityLexicon, EmotionLexicon) {
        let polarity = PolarityLexicon::from_entries([("good", 1.9), ("bad", -2.5)]);
        let emotion = EmotionLexicon::from_entries([
            (
                "good",
                EmotionFlags::from_categories(&[EmotionCategory::Joy, EmotionCategory::Positive]),
            ),
            (
                "bad",
                EmotionFlags::from_categories(&[EmotionCategory::Negative]),
            ),
        ]);
        (polarity, emotion)
    }

    fn message(sender: &str, text: &str) -> Message {
        Message {
            sender: sender.to_string(),
            timestamp: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn report_groups_by_sender() {
        let (polarity, emotion) = lexicons();
        let messages = vec![
            message("ana", "good"),
            message("ben", "bad"),
            message("ana", "good good"),
        ];

        let report = build_report(&polarity, &emotion, &messages);

        assert_eq!(report.overall.messages, 3);
        assert_eq!(report.senders.len(), 2);
        assert_eq!(report.senders["ana"].messages, 2);
        assert_eq!(report.senders["ben"].messages, 1);
    }

    #[test]
    fn overall_equals_sum_of_senders() {
        let (polarity, emotion) = lexicons();
        let messages = vec![message("ana", "good"), message("ben", "bad")];

        let report = build_report(&polarity, &emotion, &messages);

        let sender_tokens: i64 = report
            .senders
            .values()
            .map(|summary| summary.tagged_tokens)
            .sum();
        assert_eq!(report.overall.tagged_tokens, sender_tokens);
        assert_eq!(report.overall.tagged_tokens, 3);
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let (polarity, emotion) = lexicons();
        let report = build_report(&polarity, &emotion, &[]);

        assert_eq!(report.overall.messages, 0);
        assert!(report.senders.is_empty());
        assert!(report.overall.mean_compound.is_none());
    }
}
