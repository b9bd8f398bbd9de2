//! Page loaders.
//!
//! A [`Loader`] is the Rust shape of a glob-import entry: a zero-argument
//! factory producing a future of a page module. Loaders are cheap to clone
//! and compare by identity, so a registry lookup can be checked against the
//! loader that was registered.

use crate::error::{BoxError, LoadError};
use futures::future::{BoxFuture, FutureExt};
use std::{fmt, future::Future, sync::Arc};

/// The future returned by a [`Loader`].
pub type LoadFuture<M> = BoxFuture<'static, Result<M, LoadError>>;

type LoadFn<M> = dyn Fn() -> LoadFuture<M> + Send + Sync;

/// A shareable zero-argument factory producing a page module.
pub struct Loader<M> {
    load: Arc<LoadFn<M>>,
}

impl<M: Send + 'static> Loader<M> {
    /// Create a loader from an async factory.
    ///
    /// ```rust,ignore
    /// let loader = Loader::new(|| async { Ok::<_, BoxError>(HomePage) });
    /// ```
    pub fn new<F, Fut, E>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<M, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        Self {
            load: Arc::new(move || {
                factory()
                    .map(|res| res.map_err(|e| LoadError::failed(e)))
                    .boxed()
            }),
        }
    }

    /// Create a loader whose factory already returns a [`LoadFuture`].
    pub fn from_boxed<F>(factory: F) -> Self
    where
        F: Fn() -> LoadFuture<M> + Send + Sync + 'static,
    {
        Self {
            load: Arc::new(factory),
        }
    }

    /// Create a loader that resolves immediately to a clone of `module`.
    pub fn ready(module: M) -> Self
    where
        M: Clone + Sync,
    {
        Self::from_boxed(move || futures::future::ready(Ok(module.clone())).boxed())
    }
}

impl<M> Loader<M> {
    /// Invoke the factory, starting a new load.
    pub fn load(&self) -> LoadFuture<M> {
        (self.load)()
    }

    /// Returns true if both loaders share the same factory.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.load, &other.load)
    }
}

impl<M> Clone for Loader<M> {
    fn clone(&self) -> Self {
        Self {
            load: Arc::clone(&self.load),
        }
    }
}

impl<M> fmt::Debug for Loader<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("factory", &Arc::as_ptr(&self.load))
            .finish()
    }
}
