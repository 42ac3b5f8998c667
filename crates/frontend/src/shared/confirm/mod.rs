//! Confirmation gate for destructive or disruptive actions
//!
//! ```rust,ignore
//! let confirm = use_confirm();
//! spawn_local(async move {
//!     if confirm.confirm("Delete order?", "This cannot be undone.", ConfirmKind::Danger).await {
//!         delete_order(&id).await;
//!     }
//! });
//! ```

use futures::channel::oneshot;
use leptos::prelude::*;
use std::future::Future;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    Danger,
    Warning,
    Info,
}

impl ConfirmKind {
    fn class(&self) -> &'static str {
        match self {
            ConfirmKind::Danger => "confirm confirm--danger",
            ConfirmKind::Warning => "confirm confirm--warning",
            ConfirmKind::Info => "confirm confirm--info",
        }
    }

    fn confirm_label(&self) -> &'static str {
        match self {
            ConfirmKind::Danger => "Yes, delete",
            ConfirmKind::Warning | ConfirmKind::Info => "Yes, continue",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmRequest {
    pub title: String,
    pub body: String,
    pub kind: ConfirmKind,
}

/// At most one question is open; asking again dismisses the previous one
#[derive(Debug, Default)]
pub struct ConfirmGate {
    pending: Option<(ConfirmRequest, oneshot::Sender<bool>)>,
}

impl ConfirmGate {
    pub fn request(&mut self, request: ConfirmRequest) -> oneshot::Receiver<bool> {
        if let Some((_, previous)) = self.pending.take() {
            let _ = previous.send(false);
        }
        let (tx, rx) = oneshot::channel();
        self.pending = Some((request, tx));
        rx
    }

    /// Answers the open question. Returns false when nothing was pending.
    pub fn resolve(&mut self, answer: bool) -> bool {
        match self.pending.take() {
            Some((_, tx)) => tx.send(answer).is_ok(),
            None => false,
        }
    }

    pub fn current(&self) -> Option<&ConfirmRequest> {
        self.pending.as_ref().map(|(request, _)| request)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Resolves true only on an explicit "yes"; a dropped gate counts as "no"
pub async fn answer(rx: oneshot::Receiver<bool>) -> bool {
    rx.await.unwrap_or(false)
}

/// Runs `action` only when `confirmed` resolves true
pub async fn guarded<T, A, Fut>(confirmed: impl Future<Output = bool>, action: A) -> Option<T>
where
    A: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    if confirmed.await {
        Some(action().await)
    } else {
        None
    }
}

#[derive(Clone, Copy)]
pub struct ConfirmService {
    gate: RwSignal<ConfirmGate>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            gate: RwSignal::new(ConfirmGate::default()),
        }
    }

    pub fn confirm(
        &self,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: ConfirmKind,
    ) -> impl Future<Output = bool> + 'static {
        let request = ConfirmRequest {
            title: title.into(),
            body: body.into(),
            kind,
        };
        let rx = self.gate.try_update(|g| g.request(request));
        async move {
            let confirmed = match rx {
                Some(rx) => answer(rx).await,
                None => false,
            };
            log::debug!("confirmation resolved: {}", confirmed);
            confirmed
        }
    }

    pub fn resolve(&self, answer: bool) {
        self.gate.update(|g| {
            g.resolve(answer);
        });
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_confirm() -> ConfirmService {
    use_context::<ConfirmService>().expect("ConfirmService not provided in context")
}

/// Renders the open question of the [`ConfirmService`] in context
#[component]
pub fn ConfirmHost() -> impl IntoView {
    let service = use_confirm();
    let open = RwSignal::new(false);

    // Follow the gate
    Effect::new(move |_| {
        let pending = service.gate.with(|g| g.is_pending());
        if open.get_untracked() != pending {
            open.set(pending);
        }
    });

    // Closed from outside (mask click, Escape) while still pending: that is a "no"
    Effect::new(move |_| {
        if !open.get() && service.gate.with_untracked(|g| g.is_pending()) {
            service.resolve(false);
        }
    });

    let current = move || service.gate.with(|g| g.current().cloned());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    {move || current().map(|request| view! {
                        <div class=request.kind.class()>
                            <DialogTitle>{request.title.clone()}</DialogTitle>
                            <DialogContent>
                                <p class="confirm__body">{request.body.clone()}</p>
                            </DialogContent>
                            <DialogActions>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| service.resolve(true)
                                >
                                    {request.kind.confirm_label()}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| service.resolve(false)
                                >
                                    "Cancel"
                                </Button>
                            </DialogActions>
                        </div>
                    })}
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
