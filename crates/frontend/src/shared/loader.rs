//! Resource loader: fetch once per key, keep the last good data on failure
//!
//! [`LoadState`] holds the rules and is plain data; [`ResourceLoader`] drives it
//! from a reactive key inside a component.

use super::error::FetchError;
use super::notify::Notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Identifies one fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    /// The attempt failed; report it exactly once
    Failed(FetchError),
    /// A newer attempt started meanwhile; the result was dropped
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
    generation: u64,
    pending: Option<u64>,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            generation: 0,
            pending: None,
        }
    }
}

impl<T> LoadState<T> {
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.pending = Some(self.generation);
        Ticket(self.generation)
    }

    /// Success replaces the data wholesale; failure keeps whatever was shown
    pub fn finish(&mut self, ticket: Ticket, result: Result<T, FetchError>) -> Outcome {
        if self.pending != Some(ticket.0) {
            return Outcome::Stale;
        }
        self.pending = None;
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                Outcome::Applied
            }
            Err(e) => {
                self.error = Some(e.clone());
                Outcome::Failed(e)
            }
        }
    }

    /// No key to fetch with: drop any in-flight attempt and stay idle
    pub fn skip(&mut self) {
        self.pending = None;
        self.loading = false;
    }
}

pub struct ResourceLoader<T: Send + Sync + 'static> {
    state: RwSignal<LoadState<T>>,
    reload: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for ResourceLoader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ResourceLoader<T> {}

impl<T> ResourceLoader<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Fetches with `fetcher(key)` whenever `key()` changes to a new `Some` value.
    ///
    /// Failures go to `notifier` (one toast per failed attempt). Results that
    /// arrive after the owning component is gone are discarded.
    pub fn new<K, KF, F, Fut>(key: KF, fetcher: F, notifier: Notifier) -> Self
    where
        K: Clone + PartialEq + 'static,
        KF: Fn() -> Option<K> + 'static,
        F: Fn(K) -> Fut + Clone + 'static,
        Fut: Future<Output = Result<T, FetchError>> + 'static,
    {
        let state = RwSignal::new(LoadState::default());
        let reload = RwSignal::new(0u64);

        let alive = Arc::new(AtomicBool::new(true));
        {
            let alive = Arc::clone(&alive);
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }

        Effect::new(move |prev: Option<(Option<K>, u64)>| {
            let current = (key(), reload.get());
            if prev.as_ref() == Some(&current) {
                return current;
            }

            let Some(k) = current.0.clone() else {
                state.update(|s| s.skip());
                return current;
            };

            let Some(ticket) = state.try_update(|s| s.begin()) else {
                return current;
            };
            let fetcher = fetcher.clone();
            let alive = Arc::clone(&alive);
            spawn_local(async move {
                let result = fetcher(k).await;
                if !alive.load(Ordering::Relaxed) {
                    log::debug!("loader result discarded: view no longer active");
                    return;
                }
                if let Some(Outcome::Failed(e)) = state.try_update(|s| s.finish(ticket, result)) {
                    log::error!("fetch failed: {}", e);
                    if !e.is_input_error() {
                        notifier.error(e.user_message());
                    }
                }
            });
            current
        });

        Self { state, reload }
    }

    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<FetchError> {
        self.state.with(|s| s.error.clone())
    }

    /// Edits loaded data in place, e.g. after a confirmed delete
    pub fn update_data(&self, f: impl FnOnce(&mut T)) {
        self.state.try_update(|s| {
            if let Some(data) = s.data.as_mut() {
                f(data);
            }
        });
    }

    pub fn refetch(&self) {
        self.reload.try_update(|n| *n += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Runs `f` under a fresh root owner with a local futures executor
    fn with_runtime<R>(f: impl FnOnce(Owner) -> R) -> R {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        f(owner)
    }

    /// Drives effects and spawned fetches until nothing is ready
    fn settle() {
        Executor::poll_local();
    }

    type Calls = Rc<RefCell<Vec<String>>>;

    fn counting_fetcher(
        calls: Calls,
    ) -> impl Fn(String) -> std::future::Ready<Result<String, FetchError>> + Clone {
        move |key: String| {
            calls.borrow_mut().push(key.clone());
            std::future::ready(Ok(format!("rows of {}", key)))
        }
    }

    #[test]
    fn test_success_replaces_data() {
        let mut state = LoadState::default();
        let t = state.begin();
        assert!(state.loading);
        assert_eq!(state.finish(t, Ok(vec![1, 2])), Outcome::Applied);
        let t = state.begin();
        assert_eq!(state.finish(t, Ok(vec![3])), Outcome::Applied);
        assert_eq!(state.data, Some(vec![3]));
        assert!(!state.loading);
    }

    #[test]
    fn test_failure_keeps_prior_data() {
        let mut state = LoadState::default();
        let t = state.begin();
        state.finish(t, Ok(vec!["Jan"]));

        let t = state.begin();
        let outcome = state.finish(t, Err(FetchError::Network("offline".into())));
        assert_eq!(outcome, Outcome::Failed(FetchError::Network("offline".into())));
        assert_eq!(state.data, Some(vec!["Jan"]));
        assert!(state.error.is_some());
    }

    #[test]
    fn test_failure_reported_once_per_attempt() {
        let mut state: LoadState<u32> = LoadState::default();
        let t = state.begin();
        let failed = |o: &Outcome| matches!(o, Outcome::Failed(_));
        let first = state.finish(t, Err(FetchError::Network("x".into())));
        // Re-delivering the same ticket counts as stale, not as a second failure
        let again = state.finish(t, Err(FetchError::Network("x".into())));
        assert!(failed(&first));
        assert!(!failed(&again));
    }

    #[test]
    fn test_stale_result_dropped() {
        let mut state = LoadState::default();
        let old = state.begin();
        let new = state.begin();
        assert_eq!(state.finish(new, Ok("fresh")), Outcome::Applied);
        assert_eq!(state.finish(old, Ok("stale")), Outcome::Stale);
        assert_eq!(state.data, Some("fresh"));
    }

    #[test]
    fn test_skip_cancels_in_flight() {
        let mut state = LoadState::default();
        let t = state.begin();
        state.skip();
        assert!(!state.loading);
        assert_eq!(state.finish(t, Ok(1)), Outcome::Stale);
        assert_eq!(state.data, None);
    }

    #[test]
    fn test_error_cleared_by_success() {
        let mut state = LoadState::default();
        let t = state.begin();
        state.finish(t, Err(FetchError::Decode("bad".into())));
        let t = state.begin();
        state.finish(t, Ok(5));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_loader_without_key_never_fetches() {
        with_runtime(|_| {
            let calls = Calls::default();
            let key = RwSignal::new(None::<String>);
            let loader = ResourceLoader::new(
                move || key.get(),
                counting_fetcher(calls.clone()),
                Notifier::new(),
            );
            settle();
            assert!(calls.borrow().is_empty());
            assert!(!loader.loading());
            assert_eq!(loader.data(), None);
        });
    }

    #[test]
    fn test_loader_fetches_once_per_key() {
        with_runtime(|_| {
            let calls = Calls::default();
            let key = RwSignal::new(Some("r1".to_string()));
            let loader = ResourceLoader::new(
                move || key.get(),
                counting_fetcher(calls.clone()),
                Notifier::new(),
            );
            settle();
            assert_eq!(*calls.borrow(), vec!["r1"]);
            assert_eq!(loader.data(), Some("rows of r1".to_string()));

            key.set(Some("r1".to_string()));
            settle();
            assert_eq!(calls.borrow().len(), 1);

            key.set(Some("r2".to_string()));
            settle();
            assert_eq!(*calls.borrow(), vec!["r1", "r2"]);
            assert_eq!(loader.data(), Some("rows of r2".to_string()));
        });
    }

    #[test]
    fn test_loader_refetch_repeats_same_key() {
        with_runtime(|_| {
            let calls = Calls::default();
            let loader = ResourceLoader::new(
                || Some("r1".to_string()),
                counting_fetcher(calls.clone()),
                Notifier::new(),
            );
            settle();
            loader.refetch();
            settle();
            assert_eq!(*calls.borrow(), vec!["r1", "r1"]);
        });
    }

    #[test]
    fn test_loader_input_error_is_not_notified() {
        with_runtime(|_| {
            let notifier = Notifier::new();
            let loader: ResourceLoader<String> = ResourceLoader::new(
                || Some(()),
                |_| async { Err(FetchError::MissingParameter("resId")) },
                notifier,
            );
            settle();
            assert_eq!(loader.error(), Some(FetchError::MissingParameter("resId")));
            assert!(notifier.toasts().is_empty());
        });
    }

    #[test]
    fn test_loader_result_after_cleanup_is_discarded() {
        with_runtime(|owner| {
            let notifier = Notifier::new();
            let (tx, rx) = oneshot::channel::<Result<String, FetchError>>();
            let rx = Rc::new(RefCell::new(Some(rx)));

            let screen = owner.child();
            let loader = screen.with(|| {
                ResourceLoader::new(
                    || Some(()),
                    move |_| {
                        let rx = rx.borrow_mut().take();
                        async move {
                            match rx {
                                Some(rx) => rx
                                    .await
                                    .unwrap_or_else(|_| Err(FetchError::Network("dropped".into()))),
                                None => Err(FetchError::Network("fetched twice".into())),
                            }
                        }
                    },
                    notifier,
                )
            });
            settle();
            assert!(loader.loading());

            screen.cleanup();
            let _ = tx.send(Err(FetchError::Network("late reply".into())));
            settle();
            assert!(notifier.toasts().is_empty());
        });
    }
}
