use crate::auth::{Session, Subscription};
use crate::views::{Route, ViewContext};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

struct ViewCell<S> {
    state: S,
    /// Navigated away (session gone). Terminal for this instance.
    left: bool,
    disposed: bool,
}

type SharedCell<S> = Arc<Mutex<ViewCell<S>>>;

fn lock<S>(cell: &Mutex<ViewCell<S>>) -> MutexGuard<'_, ViewCell<S>> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mounted view: local state, its session subscription and its in-flight fetch.
///
/// The session callback and the fetch resolve in any order. Both write through
/// a weak handle and are ignored once the view is unmounted. Dropping the
/// value unmounts it.
pub struct Mounted<S> {
    cell: SharedCell<S>,
    subscription: Option<Subscription>,
    fetch: Option<JoinHandle<()>>,
}

impl<S> Mounted<S>
where
    S: Clone + Send + 'static,
{
    pub(crate) fn start<F>(ctx: &ViewContext, initial: S, load: F) -> Self
    where
        F: FnOnce() -> S + Send + 'static,
    {
        let cell: SharedCell<S> = Arc::new(Mutex::new(ViewCell {
            state: initial,
            left: false,
            disposed: false,
        }));

        let navigator = Arc::clone(&ctx.navigator);
        let guard_cell = Arc::downgrade(&cell);
        let subscription = ctx
            .session
            .on_session_change(Arc::new(move |session: Option<&Session>| {
                if session.is_some() {
                    return;
                }
                let Some(cell) = guard_cell.upgrade() else {
                    return;
                };
                let mut view = lock(&cell);
                if view.disposed || view.left {
                    return;
                }
                view.left = true;
                drop(view);
                navigator.navigate(Route::Login);
            }));

        // Already navigated away: nothing would ever read the result.
        let left = lock(&cell).left;
        if left {
            return Self {
                cell,
                subscription: Some(subscription),
                fetch: None,
            };
        }

        let fetch_cell = Arc::downgrade(&cell);
        let fetch = thread::spawn(move || {
            let next = load();
            let Some(cell) = fetch_cell.upgrade() else {
                tracing::debug!("view dropped before fetch resolved");
                return;
            };
            let mut view = lock(&cell);
            if view.disposed {
                tracing::debug!("discarding fetch result for unmounted view");
                return;
            }
            view.state = next;
        });

        Self {
            cell,
            subscription: Some(subscription),
            fetch: Some(fetch),
        }
    }

    pub fn state(&self) -> S {
        lock(&self.cell).state.clone()
    }

    /// True once the view navigated away because the session was absent.
    pub fn has_left(&self) -> bool {
        lock(&self.cell).left
    }

    /// Waits for the fetch to resolve and returns the resulting state.
    pub fn settle(&mut self) -> S {
        if let Some(handle) = self.fetch.take() {
            if handle.join().is_err() {
                tracing::error!("view fetch thread panicked");
            }
        }
        self.state()
    }

    /// Tears the view down. Any fetch still in flight finishes on its own
    /// and its result is discarded.
    pub fn unmount(self) {
        drop(self);
    }

    #[cfg(test)]
    pub(crate) fn take_fetch(&mut self) -> Option<JoinHandle<()>> {
        self.fetch.take()
    }

    #[cfg(test)]
    pub(crate) fn probe(&self) -> impl Fn() -> S {
        let cell = Arc::clone(&self.cell);
        move || lock(&cell).state.clone()
    }
}

impl<S> Mounted<S> {
    fn dispose(&mut self) {
        lock(&self.cell).disposed = true;
        // Unsubscribe outside the cell lock.
        self.subscription.take();
    }
}

impl<S> Drop for Mounted<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
