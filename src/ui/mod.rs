//! UI components and layouts.
//!
//! This module provides Leptos SSR components for the dashboard shell and the
//! API-key gate. Interactivity is HTML-first: buttons carry `hx-post`
//! attributes pointing at the session's [`ShellLinks`], and each endpoint
//! answers with a fresh [`render_shell`] fragment.
//!
//! # Structure
//!
//! - [`components`]: Reusable building blocks (buttons, badges, icons)
//! - [`dashboard`]: Shell layout: sidebar, header, feature grid
//! - [`gate_dialog`]: API-key gate overlay

pub mod components;
pub mod dashboard;
pub mod gate_dialog;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::shell::{NavItem, ShellState};
use dashboard::DashboardShell;

/// HTMX endpoints for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLinks {
    base: String,
}

impl ShellLinks {
    /// Links rooted at `/shell/{session_id}`.
    #[must_use]
    pub fn new(session_id: &str) -> Self {
        Self {
            base: format!("/shell/{session_id}"),
        }
    }

    /// Sidebar collapse toggle.
    #[must_use]
    pub fn toggle_sidebar(&self) -> String {
        format!("{}/sidebar/toggle", self.base)
    }

    /// Navigation click for `item`.
    #[must_use]
    pub fn nav(&self, item: NavItem) -> String {
        format!("{}/nav/{}", self.base, item.slug())
    }

    /// Gate dialog confirmation.
    #[must_use]
    pub fn gate_continue(&self) -> String {
        format!("{}/gate/continue", self.base)
    }
}

/// Render the shell element for one session.
#[must_use]
pub fn render_shell(state: ShellState, gate_visible: bool, session_id: &str) -> String {
    let links = ShellLinks::new(session_id);
    view! { <DashboardShell state=state gate_visible=gate_visible links=links /> }.to_html()
}

/// Wrap a rendered shell in the HTML document.
#[must_use]
pub fn render_document(title: &str, shell: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Visual social intelligence dashboard">
    <title>{title} - MediaLens</title>

    <!-- HTMX (local) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>

    <!-- Tailwind utilities (built from styles/tailwind.css), then brand tokens -->
    <link rel="stylesheet" href="/static/tailwind.css">
    <link rel="stylesheet" href="/static/theme.css">
</head>
<body class="antialiased">
{shell}
</body>
</html>
"#
    )
}
