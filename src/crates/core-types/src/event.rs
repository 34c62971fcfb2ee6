use serde::{Deserialize, Deserializer, Serialize};

/// Avatar activity indicator driving presentation, not business logic.
///
/// Exactly one value is active at a time; `Idle` whenever no session is in
/// flight and after every terminal or error transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarMood {
    #[default]
    Idle,
    Thinking,
    Searching,
    Analyzing,
    Alert,
    Recommending,
}

impl AvatarMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarMood::Idle => "idle",
            AvatarMood::Thinking => "thinking",
            AvatarMood::Searching => "searching",
            AvatarMood::Analyzing => "analyzing",
            AvatarMood::Alert => "alert",
            AvatarMood::Recommending => "recommending",
        }
    }
}

/// One unit of streamed agent progress.
///
/// Wire shape: `{"type": ..., "agent": ..., "content": {...}, "avatar_state": ...}`.
/// Unknown `type` values parse as [`EventKind::Unknown`] so new backend event
/// kinds never break the stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEvent {
    #[serde(flatten)]
    pub kind: EventKind,
    /// Which agent produced this event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    /// Explicit mood override sent by the backend. Parsed leniently: an
    /// unrecognized value is treated as absent rather than failing the frame.
    #[serde(
        default,
        deserialize_with = "lenient_mood",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_state: Option<AvatarMood>,
}

impl AgentEvent {
    /// The mood this event should drive, if any.
    ///
    /// An explicit `avatar_state` always wins. Without one, `search`,
    /// `thinking` and `error` imply their table moods; every other kind
    /// leaves the mood unchanged.
    pub fn mood_hint(&self) -> Option<AvatarMood> {
        self.avatar_state.or(match self.kind {
            EventKind::Search { .. } => Some(AvatarMood::Searching),
            EventKind::Thinking { .. } => Some(AvatarMood::Thinking),
            EventKind::Error { .. } => Some(AvatarMood::Alert),
            _ => None,
        })
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EventKind::Plan { .. } => "plan",
            EventKind::Search { .. } => "search",
            EventKind::Thinking { .. } => "thinking",
            EventKind::ToolCall { .. } => "tool_call",
            EventKind::Result { .. } => "result",
            EventKind::Routing { .. } => "routing",
            EventKind::Error { .. } => "error",
            EventKind::Final { .. } => "final",
            EventKind::Unknown => "unknown",
        }
    }

    /// Whether this is the terminal event carrying the consolidated answer.
    pub fn is_final(&self) -> bool {
        matches!(self.kind, EventKind::Final { .. })
    }
}

/// The event payload, discriminated by the wire `type` field. Each variant
/// carries only its relevant content shape; content fields default when
/// absent, so a sparse frame still parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Plan {
        #[serde(default)]
        content: Option<PlanContent>,
    },
    Search {
        #[serde(default)]
        content: Option<SearchContent>,
    },
    Thinking {
        #[serde(default)]
        content: Option<ThinkingContent>,
    },
    ToolCall {
        #[serde(default)]
        content: Option<ToolCallContent>,
    },
    Result {
        #[serde(default)]
        content: Option<ResultContent>,
    },
    Routing {
        #[serde(default)]
        content: Option<RoutingContent>,
    },
    /// Error payload shape is backend-defined; kept as raw JSON.
    Error {
        #[serde(default)]
        content: serde_json::Value,
    },
    Final {
        #[serde(default)]
        content: Option<FinalContent>,
    },
    /// Forward compatibility: unknown kinds are ignored, never fatal.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanContent {
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchContent {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThinkingContent {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCallContent {
    #[serde(default)]
    pub tool: String,
    #[serde(default)]
    pub action: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultContent {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingContent {
    #[serde(default)]
    pub message: String,
}

/// Consolidated answer carried by the terminal `final` event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinalContent {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub agents_used: Vec<String>,
    #[serde(default)]
    pub citations: Vec<String>,
    /// Seconds, clamped to zero when the wire sends a negative value.
    #[serde(default, deserialize_with = "crate::chat::non_negative_secs")]
    pub processing_time: f64,
}

fn lenient_mood<'de, D>(deserializer: D) -> Result<Option<AvatarMood>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value::<AvatarMood>(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_event_with_explicit_mood() {
        let raw = r#"{
            "type": "search",
            "agent": "shopping_agent",
            "content": {"query": "iPhone 15 price", "status": "executing"},
            "avatar_state": "searching",
            "timestamp": "2026-01-01T00:00:00"
        }"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("valid search event");

        assert_eq!(event.agent.as_deref(), Some("shopping_agent"));
        assert_eq!(event.mood_hint(), Some(AvatarMood::Searching));
        match &event.kind {
            EventKind::Search { content: Some(content) } => {
                assert_eq!(content.query, "iPhone 15 price");
                assert_eq!(content.status, "executing");
                assert!(content.icon.is_none());
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn explicit_mood_overrides_implied_hint() {
        let raw = r#"{"type": "search", "avatar_state": "analyzing"}"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("valid event");
        assert_eq!(event.mood_hint(), Some(AvatarMood::Analyzing));
    }

    #[test]
    fn plain_kinds_leave_mood_unchanged() {
        let raw = r#"{"type": "plan", "content": {"steps": ["a", "b"]}}"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("valid event");
        assert!(event.mood_hint().is_none());
    }

    #[test]
    fn error_kind_implies_alert() {
        let raw = r#"{"type": "error", "content": {"error": "boom"}}"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("valid event");
        assert_eq!(event.mood_hint(), Some(AvatarMood::Alert));
    }

    #[test]
    fn unknown_kind_parses_as_unknown() {
        let raw = r#"{"type": "telemetry", "content": {"cpu": 0.3}}"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("unknown kinds stay parseable");
        assert!(matches!(event.kind, EventKind::Unknown));
        assert_eq!(event.kind_name(), "unknown");
    }

    #[test]
    fn unrecognized_mood_is_treated_as_absent() {
        let raw = r#"{"type": "thinking", "content": {"message": "hmm"}, "avatar_state": "confused"}"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("lenient mood parse");
        assert!(event.avatar_state.is_none());
        // Falls back to the type-implied hint.
        assert_eq!(event.mood_hint(), Some(AvatarMood::Thinking));
    }

    #[test]
    fn final_content_fields_default_when_absent() {
        let raw = r#"{"type": "final", "content": {"response": "Done"}}"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("valid final event");
        assert!(event.is_final());
        match event.kind {
            EventKind::Final { content: Some(content) } => {
                assert_eq!(content.response.as_deref(), Some("Done"));
                assert!(content.agents_used.is_empty());
                assert!(content.citations.is_empty());
                assert_eq!(content.processing_time, 0.0);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn negative_processing_time_clamps_to_zero() {
        let raw = r#"{"type": "final", "content": {"response": "Done", "processing_time": -2.5}}"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("valid final event");
        match event.kind {
            EventKind::Final { content: Some(content) } => {
                assert_eq!(content.processing_time, 0.0);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn final_without_content_parses_with_none() {
        let raw = r#"{"type": "final"}"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("valid final event");
        assert!(matches!(event.kind, EventKind::Final { content: None }));

        let raw = r#"{"type": "final", "content": null}"#;
        let event: AgentEvent = serde_json::from_str(raw).expect("null content allowed");
        assert!(matches!(event.kind, EventKind::Final { content: None }));
    }

    #[test]
    fn missing_type_field_is_an_error() {
        assert!(serde_json::from_str::<AgentEvent>(r#"{"agent": "x"}"#).is_err());
    }
}
