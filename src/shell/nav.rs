//! Sidebar navigation entries.

use std::fmt;
use std::str::FromStr;

use super::AppView;
use crate::ui::components::Icon;

/// One entry in the navigation sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    Home,
    BrandHealthCheck,
    CompetitorSpy,
    ViralContentSearch,
    InfluencerRankings,
    KeywordMonitor,
    AdStrategyLibrary,
    SmartAlert,
}

impl NavItem {
    /// Every entry, top to bottom.
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::BrandHealthCheck,
        Self::CompetitorSpy,
        Self::ViralContentSearch,
        Self::InfluencerRankings,
        Self::KeywordMonitor,
        Self::AdStrategyLibrary,
        Self::SmartAlert,
    ];

    /// Visible label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::BrandHealthCheck => "Brand Health Check",
            Self::CompetitorSpy => "Competitor Spy",
            Self::ViralContentSearch => "Viral Content Search",
            Self::InfluencerRankings => "Influencer Rankings",
            Self::KeywordMonitor => "Keyword Monitor",
            Self::AdStrategyLibrary => "Ad Strategy Library",
            Self::SmartAlert => "Smart Alert",
        }
    }

    /// URL path segment.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::BrandHealthCheck => "brand-health-check",
            Self::CompetitorSpy => "competitor-spy",
            Self::ViralContentSearch => "viral-content-search",
            Self::InfluencerRankings => "influencer-rankings",
            Self::KeywordMonitor => "keyword-monitor",
            Self::AdStrategyLibrary => "ad-strategy-library",
            Self::SmartAlert => "smart-alert",
        }
    }

    /// View selected by clicking this entry, if it is wired to one.
    ///
    /// Only Home is wired; the rest are placeholders.
    #[must_use]
    pub fn target(self) -> Option<AppView> {
        match self {
            Self::Home => Some(AppView::Dashboard),
            _ => None,
        }
    }

    /// Icon shown beside the label.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Home => Icon::Home,
            Self::BrandHealthCheck => Icon::Activity,
            Self::CompetitorSpy => Icon::Target,
            Self::ViralContentSearch => Icon::Flame,
            Self::InfluencerRankings => Icon::Trophy,
            Self::KeywordMonitor => Icon::Search,
            Self::AdStrategyLibrary => Icon::Megaphone,
            Self::SmartAlert => Icon::BellRing,
        }
    }
}

impl fmt::Display for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a path segment names no sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNavItem(pub String);

impl FromStr for NavItem {
    type Err = UnknownNavItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|item| item.slug() == s)
            .ok_or_else(|| UnknownNavItem(s.to_string()))
    }
}
