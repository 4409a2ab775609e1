//! Top header with utility controls.

use leptos::prelude::*;

use crate::ui::components::{Badge, BadgeVariant, Button, ButtonVariant, Icon, IconSvg};

/// Header bar with search, language, notifications, and layout controls.
///
/// None of the controls are wired.
#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header class="h-14 shrink-0 flex items-center justify-end px-8 gap-6 bg-white border-b border-slate-200">
            <Button variant=ButtonVariant::Ghost aria_label="Search">
                <IconSvg icon=Icon::Search class="h-[18px] w-[18px]" />
            </Button>
            <Button variant=ButtonVariant::Ghost aria_label="Language">
                <IconSvg icon=Icon::Globe class="h-[18px] w-[18px]" />
            </Button>
            <Button variant=ButtonVariant::Ghost aria_label="Notifications" class="relative">
                <IconSvg icon=Icon::Bell class="h-[18px] w-[18px]" />
                <Badge variant=BadgeVariant::Dot class="absolute -top-1 -right-1" />
            </Button>
            <div class="w-8 h-8 bg-slate-100 rounded-lg border border-slate-200 shadow-inner flex items-center justify-center text-slate-400">
                <IconSvg icon=Icon::Layout class="h-4 w-4" />
            </div>
        </header>
    }
}
