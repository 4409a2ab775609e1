//! Reusable UI components.
//!
//! Small presentational building blocks rendered via Leptos SSR and styled
//! with Tailwind utility classes.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants, optionally HTMX-wired
//! - [`Badge`]: Premium pill or unread dot
//! - [`Avatar`]: Initials tile
//! - [`IconSvg`]: Inline SVG for an [`Icon`]

mod avatar;
mod badge;
mod button;
mod icons;

pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use icons::{Icon, IconSvg};
