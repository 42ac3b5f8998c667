use leptos::prelude::*;

/// Placeholder shown instead of a chart or table that would be empty
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-state__text">{message}</span>
        </div>
    }
}
