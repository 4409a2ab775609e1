//! Button component with variants.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid brand button, used for the primary call to action.
    #[default]
    Primary,
    /// Translucent outline pill on the promotional gradient.
    Glass,
    /// Mint pill on the promotional gradient.
    Mint,
    /// White button on dark surfaces.
    Light,
    /// Bare icon button.
    Ghost,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "w-full px-6 py-3 bg-brand-600 hover:bg-brand-700 text-white font-bold rounded-xl \
                 text-lg shadow-lg shadow-brand-500/20"
            }
            Self::Glass => {
                "px-6 py-2.5 bg-white/10 backdrop-blur-md border-2 border-white/40 text-white \
                 rounded-full font-black text-xs hover:bg-white/20 active:scale-95 shadow-lg \
                 uppercase tracking-wider"
            }
            Self::Mint => {
                "px-6 py-2.5 bg-[#5ce1bc] text-[#052b22] rounded-full font-black text-xs \
                 hover:bg-[#4dd0ab] flex items-center gap-2 \
                 shadow-[0_10px_30px_rgba(92,225,188,0.5)] active:scale-95 uppercase tracking-wider"
            }
            Self::Light => {
                "px-6 py-2.5 bg-white text-slate-900 rounded-xl font-black text-xs \
                 hover:bg-blue-50 shadow-lg active:scale-95 uppercase"
            }
            Self::Ghost => "text-slate-400 hover:text-blue-600",
        }
    }
}

/// Button component.
///
/// When `hx_post` is set the button issues an HTMX POST to that URL on click;
/// without it the button is inert.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Light>"Setup Alerts"</Button>
///     <Button hx_post="/shell/abc/gate/continue".to_string()>"Continue"</Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Endpoint posted to on click.
    #[prop(optional)]
    hx_post: Option<String>,
    /// Accessible label for icon-only buttons.
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "transition-all duration-200 {} {}",
        variant.classes(),
        class
    );

    view! {
        <button type="button" class=classes hx-post=hx_post aria-label=aria_label>
            {children()}
        </button>
    }
}
