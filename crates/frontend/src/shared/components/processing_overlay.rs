use leptos::prelude::*;

/// Blocking overlay shown while a long client-side task runs
#[component]
pub fn ProcessingOverlay(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into, optional)] message: Option<String>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Processing…".to_string());

    view! {
        <Show when=move || visible.get()>
            <div class="processing-overlay" role="alertdialog" aria-busy="true">
                <div class="processing-overlay__spinner"></div>
                <span class="processing-overlay__text">{message.clone()}</span>
            </div>
        </Show>
    }
}
