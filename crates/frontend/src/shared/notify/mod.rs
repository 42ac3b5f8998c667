//! Transient notifications (toasts)
//!
//! `Notifier` lives in context; screens push messages, `ToastHost` renders them.
//! Every toast dismisses itself after [`TOAST_TTL_MS`].

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        log::debug!("toast {:?}: {}", kind, message);
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    /// Toasts currently on screen, oldest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-host">
            <For
                each=move || notifier.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_order() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Error, "first");
        queue.push(ToastKind::Success, "second");
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "a");
        let b = queue.push(ToastKind::Info, "b");
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
    }
}
