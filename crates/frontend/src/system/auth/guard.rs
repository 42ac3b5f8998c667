use super::session::Session;
use contracts::system::auth::UserRole;
use leptos::prelude::*;

/// Renders `children` only for users holding one of `roles`
#[component]
pub fn RequireRole(
    session: Session,
    roles: &'static [UserRole],
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show
            when=move || session.user().map(|u| roles.contains(&u.role)).unwrap_or(false)
            fallback=|| view! { <div class="access-denied">"Access denied."</div> }
        >
            {children()}
        </Show>
    }
}

/// Renders `children` only when a restaurant is selected
#[component]
pub fn RequireResource(session: Session, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=move || session.resource_id().is_some()
            fallback=|| view! { <div class="empty-state">"Select a restaurant first."</div> }
        >
            {children()}
        </Show>
    }
}
