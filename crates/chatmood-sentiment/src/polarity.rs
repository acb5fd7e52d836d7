//! Rule-based polarity scoring in the VADER style.
//!
//! Each token's lexicon valence is adjusted by context: degree boosters,
//! negation windows, capitalization emphasis, idiom overrides, contrastive
//! `but`, and trailing punctuation. The adjusted contributions are summed
//! into a normalized `compound` score and sifted into `pos`/`neg`/`neu`
//! proportions.

use chatmood_core::PolarityScores;

use crate::lexicon::PolarityLexicon;
use crate::normalize::{normalize_score, round3, round4};
use crate::tokenize::words_and_emoticons;

// Empirically derived emphasis constants.
const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;

/// Denominator constant for the compound normalization curve.
const ALPHA: f64 = 15.0;

/// Degree modifiers. Positive values intensify the following word's
/// valence, negative values dampen it. Two-word entries only match through
/// the bigram check behind a scored token.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("highly", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("just enough", B_DECR),
    ("kind of", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sort of", B_DECR),
];

/// Words that negate nearby sentiment. Contractions not listed here are
/// still caught by the `n't` substring check.
const NEGATORS: &[&str] = &[
    "aint",
    "arent",
    "cannot",
    "cant",
    "couldnt",
    "darent",
    "didnt",
    "doesnt",
    "ain't",
    "aren't",
    "can't",
    "couldn't",
    "daren't",
    "didn't",
    "doesn't",
    "dont",
    "hadnt",
    "hasnt",
    "havent",
    "isnt",
    "mightnt",
    "mustnt",
    "neither",
    "don't",
    "hadn't",
    "hasn't",
    "haven't",
    "isn't",
    "mightn't",
    "mustn't",
    "neednt",
    "needn't",
    "never",
    "none",
    "nope",
    "nor",
    "not",
    "nothing",
    "nowhere",
    "oughtnt",
    "shant",
    "shouldnt",
    "uhuh",
    "wasnt",
    "werent",
    "oughtn't",
    "shan't",
    "shouldn't",
    "uh-uh",
    "wasn't",
    "weren't",
    "without",
    "wont",
    "wouldnt",
    "won't",
    "wouldn't",
    "rarely",
    "seldom",
    "despite",
];

/// Multi-word idioms whose valence replaces per-token scoring. A zero
/// entry can never win an override, it only documents the phrase.
const SPECIAL_CASE_IDIOMS: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("bus stop", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
];

fn booster_value(phrase: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(entry, _)| *entry == phrase)
        .map(|&(_, value)| value)
}

fn idiom_override(phrase: &str) -> Option<f64> {
    SPECIAL_CASE_IDIOMS
        .iter()
        .find(|(entry, _)| *entry == phrase)
        .map(|&(_, value)| value)
        .filter(|&value| value != 0.0)
}

/// Whether a lowercased token negates nearby sentiment.
fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.contains("n't")
}

/// True when the token has at least one letter and no lowercase letters.
fn is_all_caps(word: &str) -> bool {
    let mut has_alpha = false;
    for ch in word.chars() {
        if ch.is_alphabetic() {
            has_alpha = true;
            if !ch.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// Mixed-case emphasis: some, but not all, tokens are fully uppercase.
fn has_cap_differential(words: &[String]) -> bool {
    let all_caps = words.iter().filter(|word| is_all_caps(word)).count();
    let cap_differential = words.len() - all_caps;
    cap_differential > 0 && cap_differential < words.len()
}

/// Booster contribution of `word` toward a following token's valence.
/// The sign follows the target valence; all-caps boosters push harder
/// under mixed-case emphasis.
fn scalar_inc_dec(word: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let mut scalar = match booster_value(&word.to_lowercase()) {
        Some(value) => value,
        None => return 0.0,
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if is_all_caps(word) && is_cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

/// Rescale `valence` when a negator sits `start_i + 1` tokens behind
/// token `i`. "never so/this" amplifies instead, and "without doubt" is
/// left alone.
fn negation_check(valence: f64, lowered: &[String], start_i: usize, i: usize) -> f64 {
    match start_i {
        0 => {
            if is_negator(&lowered[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if lowered[i - 2] == "never" && (lowered[i - 1] == "so" || lowered[i - 1] == "this") {
                return valence * 1.25;
            }
            if lowered[i - 2] == "without" && lowered[i - 1] == "doubt" {
                return valence;
            }
            if is_negator(&lowered[i - 2]) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if lowered[i - 3] == "never"
                && (lowered[i - 2] == "so"
                    || lowered[i - 2] == "this"
                    || lowered[i - 1] == "so"
                    || lowered[i - 1] == "this")
            {
                return valence * 1.25;
            }
            if lowered[i - 3] == "without"
                && (lowered[i - 2] == "doubt" || lowered[i - 1] == "doubt")
            {
                return valence;
            }
            if is_negator(&lowered[i - 3]) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Idiom handling around token `i`: nearby windows are checked nearest
/// first and the first idiom hit replaces the valence outright; with no
/// hit, a booster bigram two tokens back still adjusts it.
fn special_idioms_check(valence: f64, lowered: &[String], i: usize) -> f64 {
    let seq = |from: usize, to: usize| lowered[from..=to].join(" ");

    if i >= 1 {
        if let Some(value) = idiom_override(&seq(i - 1, i)) {
            return value;
        }
    }
    if i >= 2 {
        if let Some(value) = idiom_override(&seq(i - 2, i)) {
            return value;
        }
        if let Some(value) = idiom_override(&seq(i - 2, i - 1)) {
            return value;
        }
    }
    if i >= 3 {
        if let Some(value) = idiom_override(&seq(i - 3, i - 1)) {
            return value;
        }
        if let Some(value) = idiom_override(&seq(i - 3, i - 2)) {
            return value;
        }
    }
    if i + 1 < lowered.len() {
        if let Some(value) = idiom_override(&seq(i, i + 1)) {
            return value;
        }
    }
    if i + 2 < lowered.len() {
        if let Some(value) = idiom_override(&seq(i, i + 2)) {
            return value;
        }
    }

    let mut valence = valence;
    if i >= 2 {
        if let Some(bigram_boost) = booster_value(&seq(i - 2, i - 1)) {
            valence += bigram_boost;
        }
    }
    valence
}

/// Flip `valence` when the previous token is a sentiment-bearing "least",
/// sparing the fixed phrases "at least" and "very least".
fn least_check(valence: f64, lowered: &[String], i: usize) -> f64 {
    if i == 0 || lowered[i - 1] != "least" {
        return valence;
    }
    if i > 1 && (lowered[i - 2] == "at" || lowered[i - 2] == "very") {
        return valence;
    }
    valence * N_SCALAR
}

/// Halve contributions before the first "but" and amplify those after it.
fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    let but_index = match lowered.iter().position(|word| word == "but") {
        Some(index) => index,
        None => return,
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but_index {
            *sentiment *= 0.5;
        } else if i > but_index {
            *sentiment *= 1.5;
        }
    }
}

/// Emphasis from `!` in the raw text: 0.292 per mark, capped at four.
#[allow(clippy::cast_precision_loss)]
fn exclamation_emphasis(text: &str) -> f64 {
    let count = text.chars().filter(|&ch| ch == '!').count().min(4);
    count as f64 * 0.292
}

/// Emphasis from `?` in the raw text: two or three marks scale linearly,
/// more than three flatten out, a single one counts nothing.
#[allow(clippy::cast_precision_loss)]
fn question_emphasis(text: &str) -> f64 {
    let count = text.chars().filter(|&ch| ch == '?').count();
    if count <= 1 {
        0.0
    } else if count <= 3 {
        count as f64 * 0.18
    } else {
        0.96
    }
}

/// Split token contributions into inflated positive and negative mass and
/// a neutral count, for the pos/neg/neu proportions.
fn sift_sentiment_scores(sentiments: &[f64]) -> (f64, f64, usize) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0_usize;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neu_count += 1;
        }
    }
    (pos_sum, neg_sum, neu_count)
}

impl PolarityLexicon {
    /// Contribution of token `i` after every context rule has applied.
    /// Tokens outside the lexicon contribute nothing.
    fn token_valence(
        &self,
        words: &[String],
        lowered: &[String],
        i: usize,
        is_cap_diff: bool,
    ) -> f64 {
        let base = match self.valence(&lowered[i]) {
            Some(valence) => valence,
            None => return 0.0,
        };
        let mut valence = base;

        // "no X" with a scorable X: the "no" itself reads as neutral.
        if lowered[i] == "no" && i + 1 < words.len() && self.contains(&lowered[i + 1]) {
            valence = 0.0;
        }

        // A "no" shortly before rescales the raw lexicon valence instead.
        let no_before = (i >= 1 && lowered[i - 1] == "no")
            || (i >= 2 && lowered[i - 2] == "no")
            || (i >= 3
                && lowered[i - 3] == "no"
                && (lowered[i - 1] == "or" || lowered[i - 1] == "nor"));
        if no_before {
            valence = base * N_SCALAR;
        }

        // All-caps tokens only stand out in mixed-case messages.
        if is_all_caps(&words[i]) && is_cap_diff {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        // Look back up to three tokens for boosters, negation, and idioms.
        // Scored words block the window at their distance.
        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let back = i - (start_i + 1);
            if self.contains(&lowered[back]) {
                continue;
            }

            let mut scalar = scalar_inc_dec(&words[back], valence, is_cap_diff);
            if start_i == 1 {
                scalar *= 0.95;
            } else if start_i == 2 {
                scalar *= 0.90;
            }
            valence += scalar;

            valence = negation_check(valence, lowered, start_i, i);
            if start_i == 2 {
                valence = special_idioms_check(valence, lowered, i);
            }
        }

        least_check(valence, lowered, i)
    }

    /// Score `text` with the full polarity rule set.
    ///
    /// Never fails: empty input, unknown-only input, and an empty lexicon
    /// all produce zero scores.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        if self.is_empty() {
            return PolarityScores::default();
        }
        let words = words_and_emoticons(text);
        if words.is_empty() {
            return PolarityScores::default();
        }
        let lowered: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();
        let is_cap_diff = has_cap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            // Boosters and a leading "kind of" score zero themselves; their
            // effect lands on the words they modify.
            if booster_value(&lowered[i]).is_some()
                || (lowered[i] == "kind" && i + 1 < words.len() && lowered[i + 1] == "of")
            {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.token_valence(&words, &lowered, i, is_cap_diff));
        }

        but_check(&lowered, &mut sentiments);

        let punct_emphasis = exclamation_emphasis(text) + question_emphasis(text);

        let mut sum = sentiments.iter().sum::<f64>();
        if sum > 0.0 {
            sum += punct_emphasis;
        } else if sum < 0.0 {
            sum -= punct_emphasis;
        }
        let compound = round4(normalize_score(sum, ALPHA));

        let (mut pos_sum, mut neg_sum, neu_count) = sift_sentiment_scores(&sentiments);
        if pos_sum > neg_sum.abs() {
            pos_sum += punct_emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= punct_emphasis;
        }

        let total = pos_sum + neg_sum.abs() + neu_count as f64;
        if total == 0.0 {
            return PolarityScores::default();
        }

        PolarityScores {
            neg: round3((neg_sum / total).abs()),
            neu: round3((neu_count as f64 / total).abs()),
            pos: round3((pos_sum / total).abs()),
            compound,
        }
    }

    /// Just the compound score for `text`.
    #[must_use]
    pub fn compound_score(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }
}
