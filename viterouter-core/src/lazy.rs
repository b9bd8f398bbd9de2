//! Lazy-loading boundary.
//!
//! [`LazyComponent`] is the framework-agnostic counterpart of a UI
//! framework's lazy primitive: it owns a [`Loader`] and runs it at most once,
//! sharing the outcome with every caller. Route construction only creates the
//! boundary; awaiting it is left to whoever renders the route.

use crate::{
    error::LoadError,
    loader::{LoadFuture, Loader},
};
use futures::future::{FutureExt, Shared};
use std::{fmt, future::Future, sync::Arc, sync::OnceLock};

struct LazyInner<M: Clone> {
    reference: String,
    loader: Loader<M>,
    pending: OnceLock<Shared<LoadFuture<M>>>,
}

/// A memoizing wrapper around a page [`Loader`].
pub struct LazyComponent<M: Clone> {
    inner: Arc<LazyInner<M>>,
}

impl<M: Clone> LazyComponent<M> {
    /// Wrap `loader`, remembering the reference it was resolved from.
    pub fn new(reference: impl Into<String>, loader: Loader<M>) -> Self {
        Self {
            inner: Arc::new(LazyInner {
                reference: reference.into(),
                loader,
                pending: OnceLock::new(),
            }),
        }
    }

    /// The component reference this boundary was resolved from.
    pub fn reference(&self) -> &str {
        &self.inner.reference
    }

    /// The underlying loader.
    pub fn loader(&self) -> &Loader<M> {
        &self.inner.loader
    }

    /// Returns true once the first load has started.
    pub fn is_requested(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    /// Returns true once a load has completed, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.inner
            .pending
            .get()
            .is_some_and(|pending| pending.peek().is_some())
    }
}

impl<M: Clone + Send + Sync + 'static> LazyComponent<M> {
    /// Load the module, starting the loader on first use.
    ///
    /// Subsequent calls (including calls on clones) share the same result.
    pub fn load(&self) -> impl Future<Output = Result<M, LoadError>> + Send + 'static {
        self.inner
            .pending
            .get_or_init(|| {
                #[cfg(feature = "tracing")]
                tracing::debug!(reference = %self.inner.reference, "Starting lazy page load");
                self.inner.loader.load().shared()
            })
            .clone()
    }
}

impl<M: Clone> Clone for LazyComponent<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: Clone> fmt::Debug for LazyComponent<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyComponent")
            .field("reference", &self.inner.reference)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoxError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_loader(calls: Arc<AtomicUsize>) -> Loader<&'static str> {
        Loader::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, BoxError>("page") }
        })
    }

    #[test]
    fn test_construction_does_not_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let lazy = LazyComponent::new("home", counting_loader(calls.clone()));

        assert_eq!(lazy.reference(), "home");
        assert!(!lazy.is_requested());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_load_runs_factory_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let lazy = LazyComponent::new("home", counting_loader(calls.clone()));
        let clone = lazy.clone();

        assert_eq!(lazy.load().await.unwrap(), "page");
        assert_eq!(clone.load().await.unwrap(), "page");
        assert!(lazy.is_loaded());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_shared() {
        let lazy: LazyComponent<u32> =
            LazyComponent::new("broken", Loader::new(|| async { Err::<u32, BoxError>("gone".into()) }));

        assert!(lazy.load().await.is_err());
        assert!(lazy.is_loaded());
        assert!(lazy.load().await.is_err());
    }
}
