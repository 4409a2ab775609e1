//! Dashboard shell components.
//!
//! [`DashboardShell`] composes the promotional bar, sidebar, header, feature
//! grid, and alert banner, and overlays the gate dialog when asked to.

mod alert_banner;
mod feature_card;
mod header;
mod promo_bar;
mod shell;
mod sidebar;

pub use alert_banner::AlertBanner;
pub use feature_card::{FeatureCardView, FeatureGrid};
pub use header::TopHeader;
pub use promo_bar::PromoBar;
pub use shell::DashboardShell;
pub use sidebar::{Sidebar, SidebarItem};
