//! Incremental SSE streaming client.
//!
//! Byte chunks in, application state out: [`decoder`] reassembles
//! newline-delimited lines across arbitrary chunk boundaries, [`parser`]
//! turns `data:` lines into typed agent events, and [`session`] owns the
//! request lifecycle and applies each event to the store in arrival order.

pub mod decoder;
pub mod parser;
pub mod session;

pub use decoder::LineDecoder;
pub use parser::parse_event_line;
pub use session::ChatClient;
