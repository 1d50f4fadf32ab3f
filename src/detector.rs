//! Keyword-based scam detection.
//!
//! A message is flagged when any keyword appears anywhere in it, compared
//! case-insensitively. Matching is plain substring search, so "banking"
//! trips "bank".

/// Keywords that flag a message as scam-related.
pub const SCAM_KEYWORDS: &[&str] = &["bank", "lottery", "upi", "password", "account", "link"];

/// Substring detector over a fixed keyword list.
#[derive(Debug, Clone)]
pub struct ScamDetector {
    /// Lower-cased keywords.
    keywords: Vec<String>,
}

impl ScamDetector {
    /// Detector with the built-in keyword list.
    pub fn new() -> Self {
        Self::with_keywords(SCAM_KEYWORDS.iter().copied())
    }

    /// Detector with a custom keyword list (for testing).
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Whether any keyword occurs in `message`.
    pub fn is_scam(&self, message: &str) -> bool {
        let lowered = message.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// Keywords present in `message`, in list order.
    pub fn matched_keywords(&self, message: &str) -> Vec<&str> {
        let lowered = message.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Lower-cased keywords in match order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for ScamDetector {
    fn default() -> Self {
        Self::new()
    }
}
