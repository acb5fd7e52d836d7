//! Tokenizers for the two scoring paths.
//!
//! [`words_and_emoticons`] feeds the polarity scorer. It keeps the original
//! case (the scorer uses capitalization as an emphasis signal) and keeps
//! short symbolic tokens such as `:)` intact instead of stripping them to
//! nothing.
//!
//! [`alnum_words`] feeds the emotion scorer and word-level statistics:
//! lowercased alphanumeric runs with contraction fragments and chat-export
//! noise filtered out.

/// Fragments left behind when an apostrophe splits a contraction.
const CONTRACTION_FRAGMENTS: &[&str] = &["m", "s", "t", "d", "ll", "re", "ve"];

/// Low-information tokens common in chat exports.
const JUNK_TOKENS: &[&str] = &[
    "don",
    "t",
    "ll",
    "ve",
    "re",
    "im",
    "id",
    "ill",
    "youre",
    "youd",
    "attachment",
    "attachments",
    "sent",
    "send",
];

/// Split `text` on whitespace and trim surrounding punctuation from each
/// token. A token whose trimmed core is two characters or shorter is kept
/// in its original form, so emoticons and very short words survive.
#[must_use]
pub fn words_and_emoticons(text: &str) -> Vec<String> {
    text.split_ascii_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.len() > 2 {
                stripped.to_owned()
            } else {
                token.to_owned()
            }
        })
        .collect()
}

/// Extract lowercased alphanumeric runs from `text`, dropping single
/// characters (except `i`), contraction fragments, and junk tokens.
#[must_use]
pub fn alnum_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.retain(|word| keep_word(word));
    words
}

fn keep_word(word: &str) -> bool {
    if word == "i" {
        return true;
    }
    if word.len() == 1 {
        return false;
    }
    if CONTRACTION_FRAGMENTS.contains(&word) {
        return false;
    }
    !JUNK_TOKENS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------
    // words_and_emoticons
    // ------------------------------------------------------------------

    #[test]
    fn splits_on_whitespace_and_trims_punctuation() {
        assert_eq!(
            words_and_emoticons("The food was GREAT!!"),
            vec!["The", "food", "was", "GREAT"]
        );
    }

    #[test]
    fn keeps_emoticons_and_short_tokens_verbatim() {
        assert_eq!(
            words_and_emoticons(":) :D it! ok"),
            vec![":)", ":D", "it!", "ok"]
        );
    }

    #[test]
    fn trims_only_surrounding_punctuation() {
        assert_eq!(words_and_emoticons("'well-done'"), vec!["well-done"]);
    }

    #[test]
    fn preserves_case_for_the_polarity_scorer() {
        assert_eq!(words_and_emoticons("So HAPPY"), vec!["So", "HAPPY"]);
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(words_and_emoticons("").is_empty());
        assert!(words_and_emoticons("   \t  ").is_empty());
    }

    // ------------------------------------------------------------------
    // alnum_words
    // ------------------------------------------------------------------

    #[test]
    fn lowercases_and_splits_on_non_alphanumerics() {
        assert_eq!(
            alnum_words("Happy days, happy NIGHTS"),
            vec!["happy", "days", "happy", "nights"]
        );
    }

    #[test]
    fn drops_contraction_fragments_but_keeps_i() {
        assert_eq!(
            alnum_words("I'm happy, you're not!"),
            vec!["i", "happy", "you", "not"]
        );
    }

    #[test]
    fn drops_chat_export_junk() {
        assert_eq!(alnum_words("Ana sent an attachment"), vec!["ana", "an"]);
    }

    #[test]
    fn keeps_digit_runs() {
        assert_eq!(
            alnum_words("see you at 10"),
            vec!["see", "you", "at", "10"]
        );
    }

    #[test]
    fn drops_single_characters_other_than_i() {
        assert_eq!(alnum_words("a b c i u"), vec!["i"]);
    }
}
