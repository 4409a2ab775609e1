//! Collapsible navigation sidebar.

use leptos::prelude::*;

use crate::shell::{NavItem, ShellState};
use crate::ui::ShellLinks;
use crate::ui::components::{Avatar, Icon, IconSvg};

/// Navigation sidebar with logo, workspace switcher, and nav items.
///
/// Width and label visibility follow `state.sidebar_collapsed`. The menu
/// button posts to the toggle endpoint; only nav items wired to a view post
/// to the navigation endpoint.
#[component]
pub fn Sidebar(
    /// Current shell state.
    state: ShellState,
    /// Endpoints for this session.
    links: ShellLinks,
) -> impl IntoView {
    let collapsed = state.sidebar_collapsed;

    let aside_classes = format!(
        "bg-white flex flex-col h-full shrink-0 border-r border-slate-200 z-50 \
         transition-all duration-300 ease-in-out {}",
        state.sidebar_width()
    );
    let logo_classes = format!(
        "h-14 flex items-center border-b border-slate-100 overflow-hidden {}",
        if collapsed { "justify-center px-0" } else { "px-5" }
    );
    let account_classes = format!(
        "p-4 transition-all duration-300 {}",
        if collapsed { "flex justify-center" } else { "" }
    );
    let account_row = format!(
        "flex items-center gap-3 {}",
        if collapsed { "flex-col" } else { "" }
    );

    let collapsed_attr = if collapsed { "true" } else { "false" };
    let expanded_attr = if collapsed { "false" } else { "true" };

    let items = NavItem::ALL
        .into_iter()
        .map(|item| {
            let hx_post = item.target().map(|_| links.nav(item));
            view! {
                <SidebarItem
                    item=item
                    active=state.is_active(item)
                    collapsed=collapsed
                    hx_post=hx_post
                />
            }
        })
        .collect_view();

    view! {
        <aside
            id="sidebar"
            class=aside_classes
            data-collapsed=collapsed_attr
        >
            <div class=logo_classes>
                <button
                    type="button"
                    id="sidebar-toggle"
                    class="text-slate-400 hover:text-blue-500 transition-colors shrink-0"
                    aria-label="Toggle sidebar"
                    aria-expanded=expanded_attr
                    hx-post=links.toggle_sidebar()
                >
                    <IconSvg icon=Icon::Menu />
                </button>
                {(!collapsed).then(|| view! { <Wordmark /> })}
            </div>

            <div class=account_classes>
                <div class=account_row>
                    <Avatar initials="P" />
                    {(!collapsed).then(|| view! {
                        <div class="flex flex-col overflow-hidden animate-fade-in">
                            <button type="button" class="flex items-center gap-1 text-sm font-bold text-slate-900">
                                "PL - HK"
                                <IconSvg icon=Icon::ChevronDown class="h-3.5 w-3.5 text-slate-400" />
                            </button>
                            <span class="text-[10px] text-slate-500 font-bold uppercase tracking-tight">
                                "Andy Wong"
                            </span>
                        </div>
                    })}
                </div>
            </div>

            <nav class="flex-1 overflow-y-auto px-2 py-2">{items}</nav>
        </aside>
    }
}

/// "MEDIA LENS" logotype.
#[component]
fn Wordmark() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 ml-3 animate-fade-in whitespace-nowrap" data-wordmark="">
            <span class="text-blue-600 font-black tracking-widest text-lg">"MEDIA"</span>
            <div class="relative w-6 h-6 shrink-0">
                <div class="absolute inset-0 border-[2px] border-blue-400 rounded-full"></div>
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="w-2.5 h-2.5 bg-white rotate-45"></div>
                </div>
            </div>
            <span class="text-blue-400 font-bold tracking-widest text-lg">"LENS"</span>
        </div>
    }
}

/// One navigation entry.
///
/// Collapsed entries hide their label and expose it as a tooltip instead;
/// the active entry gets a marker bar on the right edge.
#[component]
pub fn SidebarItem(
    /// Entry to draw.
    item: NavItem,
    /// Whether the entry points at the active view.
    active: bool,
    /// Whether the sidebar is collapsed.
    collapsed: bool,
    /// Click endpoint; `None` renders an inert button.
    hx_post: Option<String>,
) -> impl IntoView {
    let layout = if collapsed {
        "justify-center px-0 py-3"
    } else {
        "px-6 py-3 space-x-4"
    };
    let tone = if active {
        "text-blue-500 font-medium"
    } else {
        "text-gray-600 hover:bg-gray-50 hover:text-gray-900"
    };
    let icon_tone = if active {
        "text-blue-500"
    } else {
        "text-gray-400 group-hover:text-gray-600"
    };
    let classes =
        format!("w-full flex items-center transition-all duration-200 group relative {layout} {tone}");
    let title = if collapsed { item.label() } else { "" };
    let current = active.then_some("page");

    view! {
        <button
            type="button"
            class=classes
            title=title
            hx-post=hx_post
            data-nav=item.slug()
            aria-current=current
        >
            <span class=icon_tone>
                <IconSvg icon=item.icon() />
            </span>
            {(!collapsed).then(|| view! {
                <span class="text-[13px] font-semibold tracking-tight whitespace-nowrap" data-nav-label="">
                    {item.label()}
                </span>
            })}
            {(active && collapsed).then(|| view! {
                <div class="absolute right-0 w-1 h-6 bg-blue-500 rounded-l-full" data-active-marker=""></div>
            })}
        </button>
    }
}
