//! API-key gate dialog.

use leptos::prelude::*;

use crate::ui::components::{Button, Icon, IconSvg};

/// Billing documentation linked from the free-tier notice.
pub const BILLING_DOCS_URL: &str = "https://ai.google.dev/gemini-api/docs/billing";

/// Modal overlay asking the user to link a paid API key.
///
/// The dialog keeps no state of its own. Its confirm button posts to
/// `on_continue`; the parent decides whether to render the dialog again.
#[component]
pub fn GateDialog(
    /// Endpoint that runs the gate's continuation.
    on_continue: String,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-gray-900/60 backdrop-blur-sm flex items-center justify-center z-[300] p-4 animate-fade-in"
            role="dialog"
            aria-modal="true"
            aria-labelledby="gate-title"
            data-gate-dialog=""
        >
            <div class="bg-white border border-gray-200 rounded-2xl shadow-2xl max-w-lg w-full p-8 text-center flex flex-col items-center">
                <div class="bg-brand-50 p-4 rounded-full mb-6">
                    <IconSvg icon=Icon::KeyRound class="w-12 h-12 text-brand-600" />
                </div>
                <h2 id="gate-title" class="text-2xl font-extrabold text-gray-900 mb-4">
                    "Enterprise Authentication"
                </h2>
                <p class="text-gray-600 mb-6">
                    "MediaLens uses advanced AI models for competitive intelligence."
                    <br />
                    "Please link a "
                    <strong>"Paid Google Cloud API Key"</strong>
                    " to activate the analysis modules."
                </p>

                <div class="w-full bg-amber-50 border border-amber-100 rounded-lg p-4 mb-8 flex items-start text-left gap-3">
                    <IconSvg icon=Icon::ShieldAlert class="h-[18px] w-[18px] text-amber-600 shrink-0 mt-0.5" />
                    <p class="text-xs text-amber-800 leading-relaxed">
                        "Free-tier keys lack the capacity for high-frequency social data processing. See "
                        <a
                            href=BILLING_DOCS_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="underline font-bold ml-1"
                        >
                            "billing docs"
                        </a>
                        "."
                    </p>
                </div>

                <Button hx_post=on_continue>"Configure API Key"</Button>
            </div>
        </div>
    }
}
