use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageState {
    Loading,
    Loaded,
    Failed,
}

/// Image with a skeleton placeholder until it has loaded.
///
/// A broken or missing source keeps the placeholder instead of a broken icon.
#[component]
pub fn LazyImage(
    #[prop(into)] src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let initial = if src.is_some() {
        ImageState::Loading
    } else {
        ImageState::Failed
    };
    let state = RwSignal::new(initial);
    let class = class.unwrap_or("lazy-image");

    view! {
        <div class=class>
            <Show when=move || state.get() != ImageState::Loaded>
                <div
                    class="skeleton"
                    class:skeleton--static=move || state.get() == ImageState::Failed
                    aria-hidden="true"
                ></div>
            </Show>
            {src.map(|src| view! {
                <img
                    src=src
                    alt=alt.clone()
                    loading="lazy"
                    class:hidden=move || state.get() != ImageState::Loaded
                    on:load=move |_| state.set(ImageState::Loaded)
                    on:error=move |_| state.set(ImageState::Failed)
                />
            })}
        </div>
    }
}
