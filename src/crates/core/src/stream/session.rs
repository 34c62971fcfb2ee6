use std::sync::Arc;

use finverse_core_types::{
    AgentEvent, AvatarMood, ChatRequest, EventKind, MessageDraft, MessageRole,
};
use futures::StreamExt;
use log::{debug, warn};
use reqwest::Client;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::{FinverseError, FinverseResult};
use crate::store::AppStore;
use crate::stream::decoder::LineDecoder;
use crate::stream::parser::parse_event_line;

/// Reply text used when a `final` event carries no response field.
const FALLBACK_RESPONSE: &str = "Processing complete.";

/// Owns the chat request lifecycle: at most one streaming session in flight,
/// events applied to the store in arrival order, unconditional cleanup on
/// every exit path.
pub struct ChatClient {
    http: Client,
    config: ClientConfig,
    store: Arc<AppStore>,
    cancel: Mutex<CancellationToken>,
}

impl ChatClient {
    pub fn new(config: ClientConfig, store: Arc<AppStore>) -> Self {
        // No client-level timeout: it would cap the whole streaming body.
        // Idle periods are bounded per chunk in the pull loop instead.
        Self {
            http: Client::new(),
            config,
            store,
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn store(&self) -> &Arc<AppStore> {
        &self.store
    }

    /// Submits a user query and streams the agent's progress into the store.
    ///
    /// Never returns an error: transport and stream-read failures become a
    /// single assistant message describing the problem. A call while a
    /// session is in flight, or with an empty query, is a silent no-op —
    /// overlapping submissions are dropped, not queued.
    pub async fn submit(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        if !self.store.begin_session() {
            debug!("submit ignored: a session is already in flight");
            return;
        }

        self.store.push_message(MessageDraft::user(query));
        self.store.set_avatar(AvatarMood::Thinking);
        self.store.clear_events();

        let cancel = CancellationToken::new();
        *self.cancel.lock().await = cancel.clone();

        if let Err(e) = self.stream_query(query, &cancel).await {
            warn!("chat session failed: {e}");
            self.store.push_message(MessageDraft::assistant(format!(
                "I ran into an error while processing your request. Please check that the \
                 FinVerse backend is reachable at {}.\n\nError: {e}",
                self.config.base_url
            )));
        }

        // Cleanup runs on success, failure and cancellation alike.
        self.store.end_session();
    }

    /// Aborts the in-flight session, if any. The abandoned read releases its
    /// connection deterministically and cleanup runs as for a graceful end.
    pub async fn cancel(&self) {
        self.cancel.lock().await.cancel();
    }

    async fn stream_query(&self, query: &str, cancel: &CancellationToken) -> FinverseResult<()> {
        let request = self
            .http
            .post(format!("{}/api/chat/query", self.config.base_url))
            .json(&ChatRequest {
                query: query.to_string(),
                stream: true,
            })
            .send();

        // The request itself races the token too: a backend that accepts the
        // connection but never sends headers must not pin the session.
        let response = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("chat request cancelled before the response arrived");
                return Ok(());
            }
            response = request => response?.error_for_status()?,
        };

        let mut stream = response.bytes_stream();
        let mut decoder = LineDecoder::new();
        let idle_timeout = self.config.stream_idle_timeout;

        loop {
            let next = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("chat stream cancelled");
                    break;
                }
                next = timeout(idle_timeout, stream.next()) => next,
            };

            let chunk = match next {
                Ok(Some(Ok(chunk))) => chunk,
                Ok(Some(Err(e))) => return Err(FinverseError::Transport(e)),
                // Graceful end of stream.
                Ok(None) => break,
                Err(_) => return Err(FinverseError::StreamIdle(idle_timeout)),
            };

            for line in decoder.push(&chunk) {
                if let Some(event) = parse_event_line(&line) {
                    self.apply_event(event);
                }
            }
        }

        decoder.finish();
        Ok(())
    }

    /// Applies one parsed event to the store: mood hint first, then the
    /// transient log, then the finalized assistant message for the terminal
    /// kind.
    fn apply_event(&self, event: AgentEvent) {
        if let Some(mood) = event.mood_hint() {
            self.store.set_avatar(mood);
        }

        let final_reply = match &event.kind {
            EventKind::Final { content: Some(content) } => Some(MessageDraft {
                role: MessageRole::Assistant,
                content: content
                    .response
                    .clone()
                    .unwrap_or_else(|| FALLBACK_RESPONSE.to_string()),
                agents: content.agents_used.clone(),
                citations: content.citations.clone(),
                processing_time: content.processing_time,
            }),
            _ => None,
        };

        self.store.push_event(event);

        if let Some(draft) = final_reply {
            self.store.push_message(draft);
        }
    }
}
