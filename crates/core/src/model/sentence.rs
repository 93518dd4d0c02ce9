use serde::{Deserialize, Serialize};

/// A prompt sentence and the answer it should be recalled as.
///
/// Pairs are supplied by the data provider and never change once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentencePair {
    #[serde(rename = "source", alias = "korean")]
    source_text: String,
    #[serde(rename = "target", alias = "english")]
    target_text: String,
}

impl SentencePair {
    #[must_use]
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }

    /// Source-language text shown while the learner tries to recall the answer.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Target-language text revealed after the prompt.
    #[must_use]
    pub fn target_text(&self) -> &str {
        &self.target_text
    }
}
