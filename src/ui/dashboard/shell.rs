//! Top-level dashboard composition.

use leptos::prelude::*;

use super::{AlertBanner, FeatureGrid, PromoBar, Sidebar, TopHeader};
use crate::shell::ShellState;
use crate::ui::ShellLinks;
use crate::ui::gate_dialog::GateDialog;

/// Full dashboard shell.
///
/// Every HTMX request issued from inside the shell swaps the whole element,
/// so each transition endpoint answers with a fresh render of this
/// component. The gate dialog is drawn only while `gate_visible` is set.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <DashboardShell
///         state=ShellState::default()
///         gate_visible=false
///         links=ShellLinks::new("abc")
///     />
/// }
/// ```
#[component]
pub fn DashboardShell(
    /// Current view and sidebar state.
    state: ShellState,
    /// Whether the API-key gate must overlay the shell.
    gate_visible: bool,
    /// Endpoints for this session.
    links: ShellLinks,
) -> impl IntoView {
    let gate = gate_visible.then(|| view! { <GateDialog on_continue=links.gate_continue() /> });

    view! {
        <div
            id="shell"
            class="h-screen w-screen bg-[#F8FAFC] text-gray-900 font-sans flex flex-col overflow-hidden relative"
            hx-target="this"
            hx-swap="outerHTML"
            data-view=state.view.as_str()
        >
            {gate}

            <PromoBar />

            <div class="flex flex-1 overflow-hidden">
                <Sidebar state=state links=links />

                <main class="flex-1 flex flex-col bg-[#F8FAFC] overflow-hidden">
                    <TopHeader />

                    <div class="flex-1 p-6 md:p-8 flex flex-col overflow-hidden">
                        <div class="mb-6 shrink-0">
                            <h1 class="text-3xl font-black text-slate-900 tracking-tight">
                                "👋 Welcome back, MediaLens."
                            </h1>
                            <p class="text-slate-500 text-base font-medium">
                                "Your visual social intelligence dashboard is live."
                            </p>
                        </div>

                        <FeatureGrid />

                        <AlertBanner />
                    </div>
                </main>
            </div>
        </div>
    }
}
