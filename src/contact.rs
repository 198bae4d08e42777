//! Contact form state.
//!
//! The form is a visible stub: "submission" is a fixed artificial delay and
//! the payload never leaves the page (it is logged, nothing more). The state
//! machine still guards the button/spinner flow.

use serde::{Deserialize, Serialize};

/// Fixed artificial delay standing in for the network call.
pub const SUBMIT_DELAY_MS: f64 = 1500.0;
/// How long the success state is shown before the form resets.
pub const SENT_RESET_MS: f64 = 5000.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// All three fields must be non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Idle → Sending (submit) → Sent (delay resolves) → Idle (reset delay).
/// Out-of-order events leave the state unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitStatus {
    pub fn begin(self) -> Self {
        match self {
            SubmitStatus::Idle => SubmitStatus::Sending,
            other => other,
        }
    }

    pub fn resolve(self) -> Self {
        match self {
            SubmitStatus::Sending => SubmitStatus::Sent,
            other => other,
        }
    }

    pub fn reset(self) -> Self {
        match self {
            SubmitStatus::Sent => SubmitStatus::Idle,
            other => other,
        }
    }

    pub fn is_sending(self) -> bool {
        self == SubmitStatus::Sending
    }

    pub fn is_sent(self) -> bool {
        self == SubmitStatus::Sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn test_validation_requires_all_fields() {
        assert!(message("Jo", "jo@example.com", "Hi there").is_valid());
        assert!(!message("", "jo@example.com", "Hi").is_valid());
        assert!(!message("Jo", "   ", "Hi").is_valid());
        assert!(!message("Jo", "jo@example.com", "").is_valid());
        assert!(!ContactMessage::default().is_valid());
    }

    #[test]
    fn test_submit_lifecycle() {
        let status = SubmitStatus::default();
        let status = status.begin();
        assert!(status.is_sending());
        let status = status.resolve();
        assert!(status.is_sent());
        let status = status.reset();
        assert_eq!(status, SubmitStatus::Idle);
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        // resolve/reset before their turn leave the state alone
        assert_eq!(SubmitStatus::Idle.resolve(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Idle.reset(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Sending.begin(), SubmitStatus::Sending);
        assert_eq!(SubmitStatus::Sending.reset(), SubmitStatus::Sending);
        assert_eq!(SubmitStatus::Sent.begin(), SubmitStatus::Sent);
    }

    #[test]
    fn test_payload_serializes_for_logging() {
        let payload = serde_json::to_string(&message("Jo", "jo@example.com", "Hello"))
            .expect("contact payload should serialize");
        assert!(payload.contains("\"email\":\"jo@example.com\""));
    }
}
