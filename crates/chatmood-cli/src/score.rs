//! `score` subcommand: one JSON record per message.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use chatmood_core::{AppConfig, EmotionScores, Message, PolarityScores};
use chatmood_sentiment::{EmotionLexicon, PolarityLexicon};

use crate::InputArgs;

#[derive(Debug, Serialize)]
struct ScoredMessage<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    sender: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<chrono::DateTime<chrono::Utc>>,
    text: &'a str,
    polarity: PolarityScores,
    emotions: EmotionScores,
}

pub(crate) fn run(config: &AppConfig, args: &InputArgs) -> anyhow::Result<()> {
    let (polarity, emotion) = crate::load_lexicons(config)?;
    let messages = input_messages(args)?;
    if messages.is_empty() {
        tracing::info!("no messages to score");
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    for message in &messages {
        let record = scored_record(&polarity, &emotion, message);
        let json = if args.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        writeln!(stdout, "{json}").context("failed to write record")?;
    }
    tracing::info!(messages = messages.len(), "scoring complete");
    Ok(())
}

fn input_messages(args: &InputArgs) -> anyhow::Result<Vec<Message>> {
    crate::input::read_messages(args.input.as_deref(), args.format)
}

fn scored_record<'a>(
    polarity: &PolarityLexicon,
    emotion: &EmotionLexicon,
    message: &'a Message,
) -> ScoredMessage<'a> {
    let (polarity_scores, emotion_scores) = crate::score_text(polarity, emotion, &message.text);
    ScoredMessage {
        sender: &message.sender,
        timestamp: message.timestamp,
        text: &message.text,
        polarity: polarity_scores,
        emotions: emotion_scores,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use chatmood_core::EmotionCategory;

    use super::*;

    fn lexicons() -> (PolarityLexicon, EmotionLexicon) {
        let polarity = PolarityLexicon::from_entries([("good", 1.9), ("bad", -2.5)]);
        let emotion = EmotionLexicon::from_entries([
            (
                "good",
                chatmood_core::EmotionFlags::from_categories(&[
                    EmotionCategory::Joy,
                    EmotionCategory::Positive,
                ]),
            ),
            (
                "bad",
                chatmood_core::EmotionFlags::from_categories(&[EmotionCategory::Negative]),
            ),
        ]);
        (polarity, emotion)
    }

    #[test]
    fn record_carries_both_score_sets() {
        let (polarity, emotion) = lexicons();
        let message = Message::from_text("good");
        let record = scored_record(&polarity, &emotion, &message);

        assert_eq!(record.polarity.compound, 0.4404);
        assert_eq!(record.emotions.get(EmotionCategory::Joy), 1.0);
        assert_eq!(record.emotions.get(EmotionCategory::Positive), 1.0);
        assert_eq!(record.emotions.get(EmotionCategory::Negative), 0.0);
    }

    #[test]
    fn empty_sender_is_omitted_from_json() {
        let (polarity, emotion) = lexicons();
        let message = Message::from_text("bad");
        let record = scored_record(&polarity, &emotion, &message);
        let json = serde_json::to_string(&record).unwrap();

        assert!(!json.contains("sender"));
        assert!(!json.contains("timestamp"));
        assert!(json.contains("\"text\":\"bad\""));
    }
}
