//! Badge component for tier labels and status dots.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Gradient pill marking premium features.
    #[default]
    Premium,
    /// Small red unread indicator with no content.
    Dot,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Premium => {
                "bg-gradient-to-r from-blue-600 to-indigo-600 text-white text-[8px] font-black \
                 px-2 py-0.5 rounded-full uppercase tracking-widest shadow-lg"
            }
            Self::Dot => {
                "w-2.5 h-2.5 bg-red-500 rounded-full border-2 border-white shadow-sm"
            }
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Dot => "dot",
        }
    }
}

/// Badge component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge class="absolute top-3 right-3">"Premium"</Badge>
///     <Badge variant=BadgeVariant::Dot class="absolute -top-1 -right-1" />
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Premium)]
    variant: BadgeVariant,
    /// Positioning classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let classes = format!("{} {}", variant.classes(), class);

    view! {
        <span class=classes data-badge=variant.name()>
            {children.map(|c| c())}
        </span>
    }
}
