//! Browser session management.
//!
//! Each visit to the dashboard gets its own [`ShellState`](crate::shell::ShellState),
//! addressed by a UUID that the rendered markup embeds in its HTMX endpoints.
//! Sessions are held in memory only and vanish with the process. Idle
//! sessions expire after a TTL, and the store is capped so that page loads
//! cannot grow it without bound.
//!
//! # Example
//!
//! ```rust
//! use medialens::session::ShellStore;
//! use medialens::shell::ShellState;
//!
//! let store = ShellStore::new();
//! let id = store.create();
//! store.update(&id, ShellState::toggle_sidebar);
//!
//! assert!(store.get(&id).unwrap().sidebar_collapsed);
//! ```

mod store;

pub use store::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL, ShellStore};
