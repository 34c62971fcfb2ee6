use finverse_core_types::AgentEvent;
use log::debug;

/// Protocol marker for SSE data lines.
pub const DATA_PREFIX: &str = "data: ";

/// Sentinel payload marking the logical end of the stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Parses one decoded line into an event.
///
/// Returns `None` for lines without the `data: ` prefix (SSE comments and
/// keep-alives), for the `[DONE]` sentinel, and for payloads that fail to
/// parse — a malformed frame never aborts the session, it is logged and
/// skipped.
pub fn parse_event_line(line: &str) -> Option<AgentEvent> {
    let payload = line.strip_prefix(DATA_PREFIX)?.trim();
    if payload == DONE_SENTINEL {
        return None;
    }

    match serde_json::from_str::<AgentEvent>(payload) {
        Ok(event) => Some(event),
        Err(e) => {
            debug!("skipping malformed stream frame: {e}, data: {payload}");
            None
        }
    }
}
