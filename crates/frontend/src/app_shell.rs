//! Root of the rendered tree
//!
//! - `AppShell`: shows `LoginPage` until someone is signed in, then `MainLayout`
//! - `MainLayout`: shell with sidebar and tabs, synced with `?active=`

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::{can_open, default_tab_for};
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_title, TabPage};
use crate::layout::Shell;
use crate::system::auth::Session;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout(session: Session) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    if let Some(role) = session.user_untracked().map(|u| u.role) {
        tabs_store.init_router_integration(move |key| can_open(role, key), tab_title);
        if tabs_store.active.get_untracked().is_none() {
            let key = default_tab_for(role);
            tabs_store.open_tab(key, &tab_title(key));
        }
    }

    view! {
        <Shell
            session=session
            left=move || view! { <Sidebar session=session /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store session=session /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppShell(session: Session) -> impl IntoView {
    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || view! { <LoginPage session=session /> }
        >
            <MainLayout session=session />
        </Show>
    }
}
