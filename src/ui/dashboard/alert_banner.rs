//! "Smart Alert" banner under the grid.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonVariant, Icon, IconSvg};

#[component]
pub fn AlertBanner() -> impl IntoView {
    view! {
        <div class="mt-6 shrink-0 bg-slate-900 rounded-2xl p-6 text-white flex items-center justify-between shadow-xl relative overflow-hidden">
            <div class="absolute top-0 right-0 w-48 h-48 bg-blue-600/10 blur-[60px] rounded-full"></div>
            <div class="relative z-10 flex items-center gap-6">
                <div class="p-3 bg-blue-500/20 rounded-xl">
                    <IconSvg icon=Icon::BellRing class="h-5 w-5 text-blue-400" />
                </div>
                <div>
                    <h2 class="text-lg font-bold">"Smart Alert Active"</h2>
                    <p class="text-slate-400 text-sm font-medium">
                        "Predictive monitoring for your brand shift."
                    </p>
                </div>
            </div>
            <Button variant=ButtonVariant::Light class="relative z-10">"Setup Alerts"</Button>
        </div>
    }
}
