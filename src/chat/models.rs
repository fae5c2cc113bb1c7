//! Wellness chat data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::responder;

/// Greeting the companion opens every transcript with
pub const GREETING: &str = "Hi! I'm your wellness companion. How are you feeling today?";

/// Delay the original UI waits before showing a companion reply.
/// Presentation concern only; `reply` itself is synchronous.
pub const REPLY_DELAY_MS: u64 = 800;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sender {
    User,
    Companion,
}

/// A single message in a wellness chat
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A caller-owned chat history, seeded with the companion greeting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTranscript {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage::new(Sender::Companion, GREETING)],
            created_at: Utc::now(),
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(Sender::User, text));
    }

    pub fn push_companion(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(Sender::Companion, text));
    }

    /// Submit a user utterance. Blank input is suppressed and returns `None`;
    /// otherwise the user message and the companion reply are appended and the
    /// reply text is returned.
    pub fn submit(&mut self, utterance: &str) -> Option<String> {
        if utterance.trim().is_empty() {
            return None;
        }
        let reply = responder::reply(utterance, &self.messages);
        self.push_user(utterance);
        self.push_companion(reply.clone());
        Some(reply)
    }

    /// The most recent message, if any beyond the greeting was exchanged
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_starts_with_greeting() {
        let transcript = ChatTranscript::new();
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].sender, Sender::Companion);
        assert_eq!(transcript.messages[0].text, GREETING);
    }

    #[test]
    fn test_submit_appends_user_and_companion_turns() {
        let mut transcript = ChatTranscript::new();
        let reply = transcript.submit("I feel stressed").unwrap();

        assert_eq!(transcript.messages.len(), 3);
        assert_eq!(transcript.messages[1].sender, Sender::User);
        assert_eq!(transcript.messages[1].text, "I feel stressed");
        assert_eq!(transcript.messages[2].sender, Sender::Companion);
        assert_eq!(transcript.messages[2].text, reply);
    }

    #[test]
    fn test_submit_suppresses_blank_input() {
        let mut transcript = ChatTranscript::new();
        assert!(transcript.submit("").is_none());
        assert!(transcript.submit("   \t").is_none());
        assert_eq!(transcript.messages.len(), 1);
    }
}
