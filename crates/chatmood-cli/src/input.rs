//! Message input: plain text (one message per line) or JSONL.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use chatmood_core::Message;

use crate::InputFormat;

pub(crate) fn read_messages(
    path: Option<&Path>,
    format: InputFormat,
) -> anyhow::Result<Vec<Message>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            parse_messages(BufReader::new(file), format)
        }
        _ => parse_messages(std::io::stdin().lock(), format),
    }
}

fn parse_messages(reader: impl BufRead, format: InputFormat) -> anyhow::Result<Vec<Message>> {
    let mut messages = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }
        match format {
            InputFormat::Text => messages.push(Message::from_text(line)),
            InputFormat::Jsonl => match serde_json::from_str::<Message>(&line) {
                Ok(message) => messages.push(message),
                Err(error) => {
                    tracing::warn!(line = index + 1, %error, "skipping unparseable message");
                }
            },
        }
    }
    Ok(messages)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn text_format_one_message_per_line() {
        let reader = Cursor::new("hello there\nsecond line\n");
        let messages = parse_messages(reader, InputFormat::Text).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "hello there");
        assert_eq!(messages[1].text, "second line");
        assert!(messages[0].sender.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let reader = Cursor::new("first\n\n   \nsecond\n");
        let messages = parse_messages(reader, InputFormat::Text).unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn jsonl_format_reads_all_fields() {
        let reader = Cursor::new(
            r#"{"sender":"ana","timestamp":"2024-03-01T12:00:00Z","text":"good morning"}
{"text":"no sender here"}
"#,
        );
        let messages = parse_messages(reader, InputFormat::Jsonl).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, "ana");
        assert!(messages[0].timestamp.is_some());
        assert_eq!(messages[1].text, "no sender here");
        assert!(messages[1].timestamp.is_none());
    }

    #[test]
    fn bad_jsonl_lines_are_skipped() {
        let reader = Cursor::new("{\"text\":\"keep me\"}\nnot json at all\n{\"text\":\"and me\"}\n");
        let messages = parse_messages(reader, InputFormat::Jsonl).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "keep me");
        assert_eq!(messages[1].text, "and me");
    }
}
