//! Text and score normalization shared by the scorers.

/// Ordered contraction replacements, applied after lowercasing.
///
/// Applied in table order; an earlier pattern can match inside a longer
/// later one (`he'd` fires inside `she'd`, with identical output). The
/// bare `im ` entry also matches inside words ending in `im`.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("can't", "can not"),
    ("cannot", "can not"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("shouldn't", "should not"),
    ("couldn't", "could not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("ain't", "is not"),
    ("i'm", "i am"),
    ("im ", "i am "),
    ("you're", "you are"),
    ("youre", "you are"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("it's", "it is"),
    ("thats", "that is"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("what's", "what is"),
    ("who's", "who is"),
    ("let's", "let us"),
    ("i've", "i have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("i'd", "i would"),
    ("you'd", "you would"),
    ("he'd", "he would"),
    ("she'd", "she would"),
    ("they'd", "they would"),
    ("we'd", "we would"),
    ("i'll", "i will"),
    ("you'll", "you will"),
    ("he'll", "he will"),
    ("she'll", "she will"),
    ("they'll", "they will"),
    ("we'll", "we will"),
    ("would've", "would have"),
    ("could've", "could have"),
    ("should've", "should have"),
];

/// Lowercase `text`, fold curly apostrophes to `'`, and expand English
/// contractions so that downstream tokenizers see full words.
#[must_use]
pub fn normalize_contractions(text: &str) -> String {
    let mut normalized = text.to_lowercase();
    normalized = normalized.replace('\u{2019}', "'");
    normalized = normalized.replace('\u{2018}', "'");
    for &(from, to) in CONTRACTIONS {
        normalized = normalized.replace(from, to);
    }
    normalized
}

/// Map an unbounded valence sum into `[-1, 1]`.
#[must_use]
pub fn normalize_score(score: f64, alpha: f64) -> f64 {
    let normalized = score / (score * score + alpha).sqrt();
    normalized.clamp(-1.0, 1.0)
}

/// Round to three decimal places, halves away from zero.
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1_000.0).round() / 1_000.0
}

/// Round to four decimal places, halves away from zero.
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
