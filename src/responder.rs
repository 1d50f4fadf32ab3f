//! Canned bait replies for flagged messages.
//!
//! Rules are checked in order against the lower-cased message and the
//! first trigger found wins. A message mentioning both "bank" and "upi"
//! always gets the bank reply.

/// Reply used when no rule triggers.
pub const FALLBACK_REPLY: &str = "Could you explain more?";

/// A single trigger/reply pair.
#[derive(Debug, Clone)]
pub struct ReplyRule {
    /// Lower-case substring that selects this rule.
    pub trigger: &'static str,
    /// Reply sent back to the caller.
    pub reply: &'static str,
}

/// Ordered reply ladder.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<ReplyRule>,
    fallback: &'static str,
}

impl Responder {
    /// The built-in ladder: bank, upi, account, link, then the fallback.
    pub fn default_rules() -> Self {
        let rules = vec![
            ReplyRule {
                trigger: "bank",
                reply: "Oh, which bank are you calling from?",
            },
            ReplyRule {
                trigger: "upi",
                reply: "Can you share the UPI ID for verification?",
            },
            ReplyRule {
                trigger: "account",
                reply: "Could you please provide the account number so I can check?",
            },
            ReplyRule {
                trigger: "link",
                reply: "I'm not sure, could you resend the link?",
            },
        ];

        Self {
            rules,
            fallback: FALLBACK_REPLY,
        }
    }

    /// Custom ladder evaluated in the given order (for testing).
    pub fn with_rules(rules: Vec<ReplyRule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Pick the reply for `message`.
    pub fn reply_for(&self, message: &str) -> &'static str {
        let lowered = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.trigger))
            .map(|rule| rule.reply)
            .unwrap_or(self.fallback)
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[ReplyRule] {
        &self.rules
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::default_rules()
    }
}
