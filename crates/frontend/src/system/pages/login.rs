use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::notify::use_notifier;
use crate::system::auth::{api, Session};

#[component]
pub fn LoginPage(session: Session) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let notifier = use_notifier();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    log::info!("signed in as {} ({:?})", response.user.email, response.user.role);
                    notifier.success(
                        response
                            .message
                            .unwrap_or_else(|| format!("Welcome, {}", response.user.name)),
                    );
                    // AppShell switches over to the main layout
                    session.login(response.user);
                }
                Err(e) => {
                    log::error!("login failed: {}", e);
                    let message = e.user_message();
                    set_error_message.try_set(Some(message.clone()));
                    notifier.error(message);
                }
            }
            set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Restaurant Console"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
