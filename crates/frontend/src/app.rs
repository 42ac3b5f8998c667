use crate::app_shell::AppShell;
use crate::domain::a005_cart::CartStore;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::confirm::{ConfirmHost, ConfirmService};
use crate::shared::notify::{Notifier, ToastHost};
use crate::system::auth::{BrowserSessionStorage, Session};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Read once here and handed to every screen that needs it
    let session = Session::new(Arc::new(BrowserSessionStorage));

    provide_context(AppGlobalContext::new());
    provide_context(Notifier::new());
    provide_context(ConfirmService::new());
    provide_context(CartStore::new());

    view! {
        <ConfigProvider>
            <AppShell session=session />
            <ConfirmHost />
            <ToastHost />
        </ConfigProvider>
    }
}
