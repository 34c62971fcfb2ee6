//! FinVerse core library.
//!
//! The protocol and state engine behind the FinVerse assistant UI: the SSE
//! streaming client (frame decoder, event parser, session controller), the
//! shared application state store, and the dashboard data client. Render
//! layers subscribe to the store and redraw; they never talk to the backend
//! directly.

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod stream;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{FinverseError, FinverseResult};
pub use store::AppStore;
pub use stream::ChatClient;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
