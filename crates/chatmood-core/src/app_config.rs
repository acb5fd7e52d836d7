use std::path::PathBuf;

/// Runtime configuration shared by the chatmood binaries.
///
/// Lexicon files are external inputs; nothing is bundled into the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub polarity_lexicon_path: PathBuf,
    pub emotion_lexicon_path: PathBuf,
    pub log_level: String,
}
