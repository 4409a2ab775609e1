//! Avatar tile with initials.

use leptos::prelude::*;

/// Square avatar showing initials.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar initials="P" />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Initials rendered in the tile.
    initials: &'static str,
    /// Size class (e.g., "w-10 h-10").
    #[prop(default = "w-10 h-10")]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!(
        "{size} bg-blue-50 text-blue-700 rounded-xl flex items-center justify-center font-bold \
         text-lg shrink-0 shadow-sm border border-blue-100 {class}"
    );

    view! {
        <div class=classes>{initials}</div>
    }
}
