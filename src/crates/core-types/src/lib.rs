//! Shared FinVerse client DTOs.
//!
//! Low-level data types used by both the protocol core and render layers:
//! chat messages, the streamed agent event protocol, and the dashboard
//! passthrough shapes.

pub mod chat;
pub mod dashboard;
pub mod event;

pub use chat::{ChatMessage, ChatRequest, MessageDraft, MessageRole};
pub use dashboard::{ChatHealth, FinancialSummary, TransactionsPage};
pub use event::{
    AgentEvent, AvatarMood, EventKind, FinalContent, PlanContent, ResultContent, RoutingContent,
    SearchContent, ThinkingContent, ToolCallContent,
};
