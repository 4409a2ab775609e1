//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they pick up `currentColor`
//! and Tailwind sizing. Path data follows the Lucide icon set.

use leptos::prelude::*;

/// Common icon size class.
const ICON_SIZE: &str = "h-5 w-5";

/// Icons used across the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Activity,
    Bell,
    BellRing,
    ChevronDown,
    ChevronRight,
    Flame,
    Globe,
    Home,
    KeyRound,
    Layout,
    Megaphone,
    Menu,
    Search,
    Share,
    ShieldAlert,
    Target,
    Trophy,
}

impl Icon {
    /// Stable name, emitted as `data-icon` for styling and tests.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Bell => "bell",
            Self::BellRing => "bell-ring",
            Self::ChevronDown => "chevron-down",
            Self::ChevronRight => "chevron-right",
            Self::Flame => "flame",
            Self::Globe => "globe",
            Self::Home => "home",
            Self::KeyRound => "key-round",
            Self::Layout => "layout",
            Self::Megaphone => "megaphone",
            Self::Menu => "menu",
            Self::Search => "search",
            Self::Share => "share",
            Self::ShieldAlert => "shield-alert",
            Self::Target => "target",
            Self::Trophy => "trophy",
        }
    }

    fn body(self) -> AnyView {
        match self {
            Self::Activity => view! { <path d="M22 12h-4l-3 9L9 3l-3 9H2" /> }.into_any(),
            Self::Bell => view! {
                <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
                <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
            }
            .into_any(),
            Self::BellRing => view! {
                <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
                <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
                <path d="M4 2C2.8 3.7 2 5.7 2 8" />
                <path d="M22 8c0-2.3-.8-4.3-2-6" />
            }
            .into_any(),
            Self::ChevronDown => view! { <path d="m6 9 6 6 6-6" /> }.into_any(),
            Self::ChevronRight => view! { <path d="m9 18 6-6-6-6" /> }.into_any(),
            Self::Flame => view! {
                <path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z" />
            }
            .into_any(),
            Self::Globe => view! {
                <circle cx="12" cy="12" r="10" />
                <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" />
                <path d="M2 12h20" />
            }
            .into_any(),
            Self::Home => view! {
                <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
                <polyline points="9 22 9 12 15 12 15 22" />
            }
            .into_any(),
            Self::KeyRound => view! {
                <path d="M2 18v3c0 .6.4 1 1 1h4v-3h3v-3h2l1.4-1.4a6.5 6.5 0 1 0-4-4Z" />
                <circle cx="16.5" cy="7.5" r=".5" />
            }
            .into_any(),
            Self::Layout => view! {
                <rect x="3" y="3" width="18" height="18" rx="2" />
                <path d="M3 9h18" />
                <path d="M9 21V9" />
            }
            .into_any(),
            Self::Megaphone => view! {
                <path d="m3 11 18-5v12L3 14v-3z" />
                <path d="M11.6 16.8a3 3 0 1 1-5.8-1.6" />
            }
            .into_any(),
            Self::Menu => view! {
                <line x1="4" y1="12" x2="20" y2="12" />
                <line x1="4" y1="6" x2="20" y2="6" />
                <line x1="4" y1="18" x2="20" y2="18" />
            }
            .into_any(),
            Self::Search => view! {
                <circle cx="11" cy="11" r="8" />
                <path d="m21 21-4.3-4.3" />
            }
            .into_any(),
            Self::Share => view! {
                <path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8" />
                <polyline points="16 6 12 2 8 6" />
                <line x1="12" y1="2" x2="12" y2="15" />
            }
            .into_any(),
            Self::ShieldAlert => view! {
                <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
                <path d="M12 8v4" />
                <path d="M12 16h.01" />
            }
            .into_any(),
            Self::Target => view! {
                <circle cx="12" cy="12" r="10" />
                <circle cx="12" cy="12" r="6" />
                <circle cx="12" cy="12" r="2" />
            }
            .into_any(),
            Self::Trophy => view! {
                <path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6" />
                <path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18" />
                <path d="M4 22h16" />
                <path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22" />
                <path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22" />
                <path d="M18 2H6v7a6 6 0 0 0 12 0V2Z" />
            }
            .into_any(),
        }
    }
}

/// Inline SVG for an [`Icon`].
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <IconSvg icon=Icon::Bell class="h-4 w-4 text-slate-400" />
/// }
/// ```
#[component]
pub fn IconSvg(
    /// Which icon to draw.
    icon: Icon,
    /// Size and color classes; defaults to 20px.
    #[prop(default = ICON_SIZE)]
    class: &'static str,
    /// SVG stroke width.
    #[prop(default = "2")]
    stroke_width: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width=stroke_width
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=icon.name()
            aria-hidden="true"
        >
            {icon.body()}
        </svg>
    }
}
