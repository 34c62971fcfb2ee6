use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// Processing time is a duration in seconds; a negative wire value clamps to
/// zero instead of flowing into the store.
pub(crate) fn non_negative_secs<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Ok(secs.max(0.0))
}

/// Originator of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One turn in the conversation.
///
/// Immutable once appended to the store; the store keeps messages for the
/// lifetime of the session (in-memory only, no persistence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Store-assigned, unique and monotonically increasing.
    pub id: u64,
    pub role: MessageRole,
    /// Message text; may contain limited inline markup (bold, inline code,
    /// bullet markers) that render layers interpret as they see fit.
    pub content: String,
    /// Agents that contributed to an assistant reply.
    #[serde(default)]
    pub agents: Vec<String>,
    #[serde(default)]
    pub citations: Vec<String>,
    /// Backend processing time in seconds, never negative.
    #[serde(default, deserialize_with = "non_negative_secs")]
    pub processing_time: f64,
    pub created_at_ms: i64,
}

/// Message fields supplied by callers; the id and creation timestamp are
/// assigned by the store on append.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub role: MessageRole,
    pub content: String,
    pub agents: Vec<String>,
    pub citations: Vec<String>,
    pub processing_time: f64,
}

impl MessageDraft {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            agents: vec![],
            citations: vec![],
            processing_time: 0.0,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            agents: vec![],
            citations: vec![],
            processing_time: 0.0,
        }
    }

    pub fn into_message(self, id: u64) -> ChatMessage {
        ChatMessage {
            id,
            role: self.role,
            content: self.content,
            agents: self.agents,
            citations: self.citations,
            processing_time: self.processing_time,
            created_at_ms: Utc::now().timestamp_millis(),
        }
    }
}

/// Body of `POST /api/chat/query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub stream: bool,
}
