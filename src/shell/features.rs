//! Feature cards shown on the dashboard grid.

use crate::ui::components::Icon;

/// Static description of one dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub text: &'static str,
    /// Tailwind background class for the upper half.
    pub color: &'static str,
    pub icon: Icon,
    /// Shows the "Premium" badge.
    pub premium: bool,
}

/// The dashboard grid, in 3x2 order.
pub const FEATURE_CARDS: [FeatureCard; 6] = [
    FeatureCard {
        title: "Brand Health Check",
        text: "Real-time brand sentiment and ROI scores.",
        color: "bg-blue-50/70",
        icon: Icon::Activity,
        premium: false,
    },
    FeatureCard {
        title: "Competitor Spy",
        text: "Deep dive into rival campaign performance.",
        color: "bg-indigo-50/70",
        icon: Icon::Target,
        premium: false,
    },
    FeatureCard {
        title: "Viral Content Search",
        text: "High-growth trends and emerging formats.",
        color: "bg-orange-50/70",
        icon: Icon::Flame,
        premium: false,
    },
    FeatureCard {
        title: "Influencer Rankings",
        text: "Verified database with engagement truth-scoring.",
        color: "bg-purple-50/70",
        icon: Icon::Trophy,
        premium: true,
    },
    FeatureCard {
        title: "Keyword Monitor",
        text: "Scale listening for mentions and hashtags.",
        color: "bg-teal-50/70",
        icon: Icon::Search,
        premium: true,
    },
    FeatureCard {
        title: "Ad Strategy Library",
        text: "Transparency into competitor paid visual placements.",
        color: "bg-amber-50/70",
        icon: Icon::Megaphone,
        premium: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_the_grid_is_premium() {
        let premium: Vec<_> = FEATURE_CARDS
            .iter()
            .filter(|c| c.premium)
            .map(|c| c.title)
            .collect();
        assert_eq!(
            premium,
            vec!["Influencer Rankings", "Keyword Monitor", "Ad Strategy Library"]
        );
    }
}
