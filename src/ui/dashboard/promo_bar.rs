//! Sticky promotional bar above the shell.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonVariant, Icon, IconSvg};

/// Gradient call-to-action strip pinned to the top of the page.
#[component]
pub fn PromoBar() -> impl IntoView {
    view! {
        <div
            id="promo-bar"
            class="shrink-0 bg-gradient-to-r from-[#00416A] via-[#12b3eb] to-[#7ad2f6] z-[200] py-3 px-8 border-b border-white/20 shadow-2xl"
        >
            <div class="max-w-[1600px] mx-auto flex flex-col md:flex-row items-center justify-center gap-6">
                <div class="flex items-center gap-4">
                    <span class="text-2xl animate-pulse">"💡"</span>
                    <p class="text-white font-extrabold text-base md:text-lg tracking-tight drop-shadow-lg">
                        "Connect channels to run your actual business and serve real clients!"
                    </p>
                </div>
                <div class="flex items-center gap-4 shrink-0">
                    <Button variant=ButtonVariant::Glass>"Upgrade now"</Button>
                    <Button variant=ButtonVariant::Mint>
                        <IconSvg icon=Icon::Share class="h-3.5 w-3.5" stroke_width="3" />
                        "Connect channel"
                    </Button>
                </div>
            </div>
        </div>
    }
}
