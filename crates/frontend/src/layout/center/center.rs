use super::tabs::TabBar;
use leptos::prelude::*;

/// Tab strip above the content of the open tabs
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs">
            <TabBar />
            <div class="tab-content">
                {children()}
            </div>
        </div>
    }
}
