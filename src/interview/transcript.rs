// src/interview/transcript.rs - Append-only interview transcript

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Ai,
}

/// Rating and notes attached to a canned interviewer reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub rating: u8,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

/// Ordered message log. Ids start at 1 and are assigned here, never by callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        speaker: Speaker,
        text: impl Into<String>,
        feedback: Option<Feedback>,
    ) -> &Message {
        let id = self.next_id();
        self.messages.push(Message {
            id,
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
            feedback,
        });
        &self.messages[self.messages.len() - 1]
    }

    fn next_id(&self) -> u32 {
        self.messages.last().map(|m| m.id + 1).unwrap_or(1)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn first(&self) -> Option<&Message> {
        self.messages.first()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
