//! Regex extraction of scam "intelligence" from raw message text.
//!
//! Three independent patterns run over the raw (not lower-cased) text.
//! Matches keep their order of appearance and are never deduplicated.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Standalone runs of 10 to 16 digits.
static BANK_ACCOUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{10,16}\b").expect("Invalid bank account regex"));

/// `local@domain` where both halves are word characters, dots or hyphens.
/// Ordinary email addresses match too.
static UPI_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w.-]+@[\w.-]+\b").expect("Invalid UPI id regex"));

/// `http://` or `https://` up to the next whitespace. Trailing punctuation stays.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("Invalid URL regex"));

/// Candidate sensitive tokens found in one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIntelligence {
    pub bank_accounts: Vec<String>,
    pub upi_ids: Vec<String>,
    pub phishing_urls: Vec<String>,
}

impl ExtractedIntelligence {
    /// Run all three extractors over `message`.
    pub fn extract(message: &str) -> Self {
        Self {
            bank_accounts: find_all(&BANK_ACCOUNT_REGEX, message),
            upi_ids: find_all(&UPI_ID_REGEX, message),
            phishing_urls: find_all(&URL_REGEX, message),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bank_accounts.is_empty() && self.upi_ids.is_empty() && self.phishing_urls.is_empty()
    }
}

fn find_all(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_accounts_need_10_to_16_digits() {
        let intel = ExtractedIntelligence::extract(
            "short 123456789 ok 1234567890 long 1234567890123456 too long 12345678901234567",
        );
        assert_eq!(intel.bank_accounts, vec!["1234567890", "1234567890123456"]);
    }

    #[test]
    fn bank_accounts_must_be_standalone() {
        let intel = ExtractedIntelligence::extract("acct1234567890 and 1234567890x");
        assert!(intel.bank_accounts.is_empty());

        let intel = ExtractedIntelligence::extract("(9876543210), 1111222233334444.");
        assert_eq!(intel.bank_accounts, vec!["9876543210", "1111222233334444"]);
    }

    #[test]
    fn upi_ids_and_emails_both_match() {
        let intel = ExtractedIntelligence::extract("pay to rahul.k@okaxis or mail me@example.com.");
        assert_eq!(intel.upi_ids, vec!["rahul.k@okaxis", "me@example.com"]);
    }

    #[test]
    fn urls_stop_only_at_whitespace() {
        let intel = ExtractedIntelligence::extract(
            "go to http://evil.example/x, then https://pay.example/login?id=7\tnow",
        );
        assert_eq!(
            intel.phishing_urls,
            vec!["http://evil.example/x,", "https://pay.example/login?id=7"]
        );
    }

    #[test]
    fn scheme_is_case_sensitive_on_raw_text() {
        let intel = ExtractedIntelligence::extract("HTTP://SHOUTY.example");
        assert!(intel.phishing_urls.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let intel = ExtractedIntelligence::extract("1234567890 then 1234567890 again");
        assert_eq!(intel.bank_accounts, vec!["1234567890", "1234567890"]);
    }

    #[test]
    fn categories_overlap_independently() {
        let intel = ExtractedIntelligence::extract("https://x.example/a@b.example");
        assert_eq!(intel.phishing_urls, vec!["https://x.example/a@b.example"]);
        assert_eq!(intel.upi_ids, vec!["a@b.example"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let msg = "account 1234567890123 at http://evil.example/x for me@example.com";
        assert_eq!(
            ExtractedIntelligence::extract(msg),
            ExtractedIntelligence::extract(msg)
        );
    }

    #[test]
    fn plain_text_yields_nothing() {
        assert!(ExtractedIntelligence::extract("hello there").is_empty());
    }
}
