use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use finverse_core_types::{AgentEvent, AvatarMood, ChatMessage, FinancialSummary, MessageDraft};
use serde_json::Value;
use tokio::sync::watch;

#[derive(Debug, Default)]
struct AppState {
    messages: Vec<ChatMessage>,
    events: Vec<AgentEvent>,
    avatar: AvatarMood,
    transactions: Vec<Value>,
    summary: Option<FinancialSummary>,
}

/// Shared application state.
///
/// Written by the session controller (chat state) and by the dashboard
/// refresh path (transactions, summary); read by render layers. Every
/// mutation is atomic with respect to readers and bumps a revision watch
/// channel so subscribers know to redraw.
///
/// Messages are append-only for the lifetime of the process; the event log
/// is transient and cleared at the start of each streaming session.
pub struct AppStore {
    state: RwLock<AppState>,
    processing: AtomicBool,
    next_message_id: AtomicU64,
    revision: watch::Sender<u64>,
}

impl AppStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: RwLock::new(AppState::default()),
            processing: AtomicBool::new(false),
            next_message_id: AtomicU64::new(1),
            revision,
        }
    }

    /// Change feed for render layers: the value increments on every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn touch(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    // Writers never panic while holding the lock; recover from poisoning
    // instead of propagating a panic into unrelated readers.
    fn read_state(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, AppState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Atomically claims the in-flight slot. Returns `false` when a session
    /// is already running, in which case nothing changes.
    pub fn begin_session(&self) -> bool {
        let claimed = self
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if claimed {
            self.touch();
        }
        claimed
    }

    /// Releases the in-flight slot and resets the mood to idle. Called on
    /// every session exit path, success or failure.
    pub fn end_session(&self) {
        self.write_state().avatar = AvatarMood::Idle;
        self.processing.store(false, Ordering::Release);
        self.touch();
    }

    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    /// Appends a message, assigning its id and creation timestamp. Returns
    /// the assigned id.
    pub fn push_message(&self, draft: MessageDraft) -> u64 {
        let id = self.next_message_id.fetch_add(1, Ordering::Relaxed);
        let message = draft.into_message(id);
        self.write_state().messages.push(message);
        self.touch();
        id
    }

    pub fn set_avatar(&self, mood: AvatarMood) {
        self.write_state().avatar = mood;
        self.touch();
    }

    /// Appends to the transient event log. The log is unbounded here; render
    /// layers decide how much of it to display.
    pub fn push_event(&self, event: AgentEvent) {
        self.write_state().events.push(event);
        self.touch();
    }

    pub fn clear_events(&self) {
        self.write_state().events.clear();
        self.touch();
    }

    pub fn set_transactions(&self, transactions: Vec<Value>) {
        self.write_state().transactions = transactions;
        self.touch();
    }

    pub fn set_summary(&self, summary: FinancialSummary) {
        self.write_state().summary = Some(summary);
        self.touch();
    }

    /// Conversation history in insertion order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.read_state().messages.clone()
    }

    pub fn message_count(&self) -> usize {
        self.read_state().messages.len()
    }

    /// Transient event log in insertion order.
    pub fn events(&self) -> Vec<AgentEvent> {
        self.read_state().events.clone()
    }

    pub fn avatar(&self) -> AvatarMood {
        self.read_state().avatar
    }

    pub fn transactions(&self) -> Vec<Value> {
        self.read_state().transactions.clone()
    }

    pub fn summary(&self) -> Option<FinancialSummary> {
        self.read_state().summary.clone()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
