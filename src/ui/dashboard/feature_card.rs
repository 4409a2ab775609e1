//! Dashboard feature cards.

use leptos::prelude::*;

use crate::shell::{FEATURE_CARDS, FeatureCard};
use crate::ui::components::{Badge, Icon, IconSvg};

/// 3x2 grid of every configured feature card.
#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <div class="flex-1 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-5 overflow-hidden">
            {FEATURE_CARDS
                .into_iter()
                .map(|card| view! { <FeatureCardView card=card /> })
                .collect_view()}
        </div>
    }
}

/// A single feature card.
///
/// The upper half carries the card's color with a faded oversized icon and a
/// foreground icon tile; premium cards tint that icon blue and add a badge.
#[component]
pub fn FeatureCardView(
    /// Card to render.
    card: FeatureCard,
) -> impl IntoView {
    let hero_classes = format!(
        "h-1/2 relative overflow-hidden flex items-center justify-center {} \
         transition-transform duration-500 group-hover:scale-105",
        card.color
    );
    let icon_classes = if card.premium {
        "h-8 w-8 text-blue-600"
    } else {
        "h-8 w-8 text-gray-800"
    };

    view! {
        <div
            class="rounded-2xl overflow-hidden flex flex-col border border-gray-100 shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all duration-300 bg-white group cursor-pointer h-full max-h-[280px]"
            data-feature=card.title
        >
            <div class=hero_classes>
                <IconSvg icon=card.icon class="h-20 w-20 absolute -right-2 -bottom-2 opacity-10 rotate-12" />
                <div class="relative z-10 p-3 bg-white/90 backdrop-blur-md rounded-xl shadow-lg transform transition-transform duration-300 group-hover:scale-110">
                    <IconSvg icon=card.icon class=icon_classes stroke_width="1.5" />
                </div>
                {card.premium.then(|| view! {
                    <Badge class="absolute top-3 right-3">"Premium"</Badge>
                })}
            </div>
            <div class="p-4 flex-1 flex flex-col bg-white overflow-hidden">
                <h3 class="text-sm font-bold text-gray-900 mb-1 group-hover:text-blue-600 transition-colors leading-tight truncate">
                    {card.title}
                </h3>
                <p class="text-[11px] text-gray-500 mb-3 leading-tight line-clamp-2 font-medium">
                    {card.text}
                </p>
                <div class="mt-auto flex items-center text-blue-600 font-bold text-[11px] group-hover:gap-2 transition-all">
                    "Launch"
                    <IconSvg icon=Icon::ChevronRight class="h-3.5 w-3.5 ml-0.5" />
                </div>
            </div>
        </div>
    }
}
