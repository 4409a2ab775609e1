//! MediaLens dashboard shell.
//!
//! A server-rendered landing dashboard for a social-media-analytics product:
//! a promotional bar, a collapsible navigation sidebar, a grid of feature
//! cards, and an API-key gate that overlays everything until confirmed.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving the page and HTMX fragment endpoints
//! - **UI**: Leptos SSR components, wired with `hx-post` attributes
//! - **State**: Explicit per-session view state, no client-side scripting
//!
//! # Modules
//!
//! - [`shell`]: View state and its transitions
//! - [`session`]: Per-browser-session state store
//! - [`gate`]: API-key gate collaborator
//! - [`ui`]: Leptos components and page rendering
//! - [`server`]: Router and request handlers

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod gate;
pub mod server;
pub mod session;
pub mod shell;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use gate::ApiKeyGate;
use session::ShellStore;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Per-session shell state.
    pub shells: ShellStore,
    /// Decides whether the API key dialog overlays the shell.
    pub gate: Arc<dyn ApiKeyGate>,
}
