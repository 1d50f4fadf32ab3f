//! Message classification and reply composition.
//!
//! `Honeypot` holds everything a request needs (secret, detector, reply
//! ladder) and never mutates it, so one instance is shared across all
//! requests behind an `Arc`.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::HoneypotConfig;
use crate::detector::ScamDetector;
use crate::error::AuthError;
use crate::intel::ExtractedIntelligence;
use crate::responder::Responder;

// ── Request / response shapes ───────────────────────────────────────────

/// Inbound chat message. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub api_key: String,
    /// Opaque; never validated or looked up.
    pub conversation_id: String,
    pub message: String,
    /// Prior turns. Only the length is used.
    pub history: Vec<String>,
}

/// Turn count and processing time for this call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub turns: u64,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

/// Result of processing one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub scam_detected: bool,
    pub engagement_metrics: EngagementMetrics,
    pub extracted_intelligence: ExtractedIntelligence,
    /// Only present when a scam was detected.
    pub agent_reply: Option<String>,
}

// ── Honeypot ────────────────────────────────────────────────────────────

/// Read-only request context.
pub struct Honeypot {
    api_key: SecretString,
    detector: ScamDetector,
    responder: Responder,
}

impl Honeypot {
    /// Create a honeypot with the built-in keywords and reply ladder.
    pub fn new(config: &HoneypotConfig) -> Self {
        Self::with_parts(
            config.api_key.clone(),
            ScamDetector::new(),
            Responder::default_rules(),
        )
    }

    /// Create a honeypot from explicit parts (for testing).
    pub fn with_parts(api_key: SecretString, detector: ScamDetector, responder: Responder) -> Self {
        Self {
            api_key,
            detector,
            responder,
        }
    }

    /// Process one message at the current wall-clock time.
    pub fn process_message(&self, input: &InboundMessage) -> Result<ResponseRecord, AuthError> {
        self.process_message_at(input, Utc::now())
    }

    /// Process one message as of `now`.
    ///
    /// The credential is checked first. On mismatch nothing else is computed.
    pub fn process_message_at(
        &self,
        input: &InboundMessage,
        now: DateTime<Utc>,
    ) -> Result<ResponseRecord, AuthError> {
        self.authorize(&input.api_key)?;

        let scam_detected = self.detector.is_scam(&input.message);
        if scam_detected {
            debug!(
                conversation_id = %input.conversation_id,
                keywords = ?self.detector.matched_keywords(&input.message),
                "Scam keywords matched"
            );
        }

        let extracted_intelligence = ExtractedIntelligence::extract(&input.message);
        let agent_reply = scam_detected.then(|| self.responder.reply_for(&input.message).to_string());

        Ok(ResponseRecord {
            scam_detected,
            engagement_metrics: EngagementMetrics {
                turns: input.history.len() as u64 + 1,
                timestamp: now.timestamp(),
            },
            extracted_intelligence,
            agent_reply,
        })
    }

    /// Exact, case-sensitive comparison against the configured secret.
    fn authorize(&self, presented: &str) -> Result<(), AuthError> {
        if presented == self.api_key.expose_secret() {
            Ok(())
        } else {
            Err(AuthError::InvalidApiKey)
        }
    }
}
