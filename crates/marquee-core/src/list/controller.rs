//! Generic fetch lifecycle manager.

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, warn};

use super::ListState;

/// Drives a list-producing asynchronous operation and owns its [`ListState`].
///
/// Every fetch is tagged with a generation number. Starting a new fetch, or
/// cancelling, advances the generation under the state channel's lock, so a
/// result that arrives for an older generation is dropped instead of
/// overwriting fresher state. Dropping the controller cancels it.
///
/// # Example
///
/// ```
/// use marquee_core::{ListState, RemoteListController};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let list = RemoteListController::new("Unable to load. Please try again later.");
/// let state = list.load(|| async { Ok::<_, String>(vec![1, 2, 3]) }).await;
/// assert_eq!(state, ListState::Success(vec![1, 2, 3]));
/// # }
/// ```
pub struct RemoteListController<T> {
    inner: Arc<Inner<T>>,
    task: Mutex<Option<AbortHandle>>,
}

struct Inner<T> {
    state: watch::Sender<ListState<T>>,
    generation: AtomicU64,
    failure_message: String,
}

impl<T> Inner<T> {
    /// Enter `Loading` and claim a new generation.
    fn begin(&self) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ListState::Loading;
        });
        generation
    }

    /// Invalidate any in-flight generation without touching the state.
    fn invalidate(&self) {
        self.state.send_if_modified(|_| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            false
        });
    }

    /// Apply a fetch outcome if its generation is still current.
    fn finish<E: Display>(&self, generation: u64, outcome: Result<Vec<T>, E>) -> bool {
        let count = outcome.as_ref().map_or(0, Vec::len);
        let mut failure = None;

        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = match outcome {
                Ok(items) => ListState::Success(items),
                Err(e) => {
                    failure = Some(e.to_string());
                    ListState::Failure(self.failure_message.clone())
                }
            };
            true
        });

        match (applied, failure) {
            (false, _) => debug!(generation, "Discarding superseded fetch result"),
            (true, Some(error)) => warn!(generation, %error, "Fetch failed"),
            (true, None) => debug!(generation, count, "Fetch succeeded"),
        }
        applied
    }
}

impl<T> RemoteListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an idle controller.
    ///
    /// `failure_message` is what [`ListState::Failure`] will hold when a
    /// fetch fails; the underlying error is only logged.
    pub fn new(failure_message: impl Into<String>) -> Self {
        let (state, _) = watch::channel(ListState::Idle);
        Self {
            inner: Arc::new(Inner {
                state,
                generation: AtomicU64::new(0),
                failure_message: failure_message.into(),
            }),
            task: Mutex::new(None),
        }
    }

    /// Returns a snapshot of the present state.
    pub fn current_state(&self) -> ListState<T> {
        self.inner.state.borrow().clone()
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<ListState<T>> {
        self.inner.state.subscribe()
    }

    /// Start a fetch on the tokio runtime.
    ///
    /// The state becomes `Loading` before this returns. A fetch already in
    /// flight is aborted and its result will never be applied.
    pub fn start<F, Fut, E>(&self, fetch: F) -> JoinHandle<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        // Held until the new handle is stored so concurrent starts cannot
        // abort a newer task on behalf of an older generation.
        let mut task = self.lock_task();
        let generation = self.inner.begin();
        let inner = Arc::clone(&self.inner);
        let fetch = fetch();

        let handle = tokio::spawn(async move {
            let outcome = fetch.await;
            inner.finish(generation, outcome);
        });

        if let Some(previous) = task.replace(handle.abort_handle()) {
            previous.abort();
        }
        handle
    }

    /// Run a fetch to completion on the current task.
    ///
    /// Returns the state after the fetch settles. If another fetch was
    /// started meanwhile, this fetch's result is discarded and the newer
    /// state is returned.
    pub async fn load<F, Fut, E>(&self, fetch: F) -> ListState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
        E: Display,
    {
        let generation = {
            let mut task = self.lock_task();
            let generation = self.inner.begin();
            if let Some(previous) = task.take() {
                previous.abort();
            }
            generation
        };

        let outcome = fetch().await;
        self.inner.finish(generation, outcome);
        self.current_state()
    }
}

impl<T> RemoteListController<T> {
    /// Stop caring about the in-flight fetch.
    ///
    /// The fetch task is aborted and no later result can change the state.
    /// A subsequent `start` or `load` works as usual.
    pub fn cancel(&self) {
        let mut task = self.lock_task();
        self.inner.invalidate();
        if let Some(previous) = task.take() {
            previous.abort();
        }
    }

    fn lock_task(&self) -> MutexGuard<'_, Option<AbortHandle>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Drop for RemoteListController<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> std::fmt::Debug for RemoteListController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteListController")
            .field("state", &self.inner.state.borrow().name())
            .field("generation", &self.inner.generation.load(Ordering::SeqCst))
            .finish()
    }
}
