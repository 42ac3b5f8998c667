use leptos::prelude::*;

/// Native date field; values are `YYYY-MM-DD`, empty when cleared
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<String>,
    on_change: impl Fn(String) + 'static,
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="date-input">
            {label.map(|l| view! { <span class="date-input__label">{l}</span> })}
            <input
                type="date"
                class="date-input__field"
                prop:value=value
                on:change=move |ev| on_change(event_target_value(&ev))
            />
        </label>
    }
}
