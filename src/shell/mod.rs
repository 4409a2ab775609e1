//! Dashboard shell view state.
//!
//! The shell owns two pieces of UI state: which dashboard section is
//! active and whether the navigation sidebar is collapsed. Both live in
//! [`ShellState`], which the UI layer receives as plain data. Click handlers
//! are HTTP endpoints that apply one of the transitions below and re-render.
//!
//! # Example
//!
//! ```rust
//! use medialens::shell::{AppView, NavItem, ShellState};
//!
//! let mut state = ShellState::default();
//! assert!(!state.sidebar_collapsed);
//!
//! state.toggle_sidebar();
//! assert!(state.sidebar_collapsed);
//!
//! assert!(state.navigate(NavItem::Home));
//! assert_eq!(state.view, AppView::Dashboard);
//! ```

mod features;
mod nav;

pub use features::{FEATURE_CARDS, FeatureCard};
pub use nav::{NavItem, UnknownNavItem};

use serde::{Deserialize, Serialize};

/// Dashboard section selected in the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppView {
    /// Landing grid with the feature cards.
    #[default]
    Dashboard,
}

impl AppView {
    /// Stable identifier used in markup and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
        }
    }
}

/// Per-session UI state owned by the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    /// Active dashboard section.
    pub view: AppView,
    /// Whether the sidebar is narrowed to icons only.
    pub sidebar_collapsed: bool,
}

impl ShellState {
    /// Flip the sidebar between expanded and collapsed.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Apply a sidebar click.
    ///
    /// Returns `false` and leaves the state untouched for items that are not
    /// wired to a view.
    pub fn navigate(&mut self, item: NavItem) -> bool {
        match item.target() {
            Some(view) => {
                self.view = view;
                true
            }
            None => false,
        }
    }

    /// Whether `item` points at the active view.
    #[must_use]
    pub fn is_active(&self, item: NavItem) -> bool {
        item.target() == Some(self.view)
    }

    /// Tailwind width class for the sidebar.
    #[must_use]
    pub fn sidebar_width(&self) -> &'static str {
        if self.sidebar_collapsed {
            "w-[70px]"
        } else {
            "w-[260px]"
        }
    }
}
