//! Testing utilities for viterouter.
//!
//! This module provides helpers for tests of registries, builders and
//! engines.
//!
//! # Features
//!
//! - [`CountingLoader`]: hands out loaders and counts how often they run
//! - [`module_map`]: builds a raw glob table from `(path, module)` pairs
//! - [`RecordingEngine`]: an engine that records which constructor was used

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use viterouter_core::{HistoryKind, Loader, ResolvedRoute, RouterEngine, RouterError, RouterOptions};

// ============================================================================
// Counting Loader
// ============================================================================

/// Hands out loaders that share one invocation counter.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingLoader::new();
/// let registry = ModuleRegistry::builder()
///     .register("./src/pages/home/index.tsx", counter.loader(HomePage))
///     .build();
///
/// // Building routes never runs a loader.
/// router.create_router(&routes, RouterOptions::default())?;
/// assert_eq!(counter.count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct CountingLoader {
    calls: Arc<AtomicUsize>,
}

impl CountingLoader {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader resolving to a clone of `module` that bumps the counter.
    pub fn loader<M>(&self, module: M) -> Loader<M>
    where
        M: Clone + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.calls);
        Loader::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            futures::future::ready(Ok::<_, viterouter_core::BoxError>(module.clone()))
        })
    }

    /// Number of loader invocations so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Raw Module Tables
// ============================================================================

/// Build a raw glob table of ready loaders.
///
/// ```rust,ignore
/// let table = module_map([
///     ("./src/pages/home/index.tsx", "home"),
///     ("./src/pages/about.tsx", "about"),
/// ]);
/// ```
pub fn module_map<M, I, S>(entries: I) -> Vec<(String, Loader<M>)>
where
    M: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = (S, M)>,
    S: Into<String>,
{
    entries
        .into_iter()
        .map(|(path, module)| (path.into(), Loader::ready(module)))
        .collect()
}

// ============================================================================
// Recording Engine
// ============================================================================

/// What a [`RecordingEngine`] saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCall {
    /// Constructor that ran.
    pub history: HistoryKind,
    /// Number of top-level routes passed in.
    pub routes: usize,
    /// Options passed in.
    pub options: RouterOptions,
}

/// An engine that records each construction and returns the call.
///
/// Useful for verifying that the right constructor runs and that options
/// pass through untouched.
#[derive(Clone, Default)]
pub struct RecordingEngine {
    calls: Arc<Mutex<Vec<EngineCall>>>,
}

impl RecordingEngine {
    /// Create an engine with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, history: HistoryKind, routes: usize, options: RouterOptions) -> EngineCall {
        let call = EngineCall {
            history,
            routes,
            options,
        };
        self.calls.lock().unwrap().push(call.clone());
        call
    }
}

impl<M: Clone> RouterEngine<M> for RecordingEngine {
    type Router = EngineCall;

    fn create_browser_router(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError> {
        Ok(self.record(HistoryKind::Browser, routes.len(), options))
    }

    fn create_hash_router(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError> {
        Ok(self.record(HistoryKind::Hash, routes.len(), options))
    }

    fn create_memory_router(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError> {
        Ok(self.record(HistoryKind::Memory, routes.len(), options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counting_loader_counts() {
        let counter = CountingLoader::new();
        let loader = counter.loader(5u32);

        assert_eq!(counter.count(), 0);
        assert_eq!(loader.load().await.unwrap(), 5);
        assert_eq!(loader.load().await.unwrap(), 5);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_module_map_keeps_order() {
        let table = module_map([("./pages/a.tsx", 1), ("./pages/b.tsx", 2)]);
        let paths: Vec<_> = table.iter().map(|(path, _)| path.as_str()).collect();
        assert_eq!(paths, vec!["./pages/a.tsx", "./pages/b.tsx"]);
    }

    #[test]
    fn test_recording_engine_records() {
        let engine = RecordingEngine::new();
        let call = RouterEngine::<()>::create(&engine, Vec::new(), RouterOptions::hash().basename("/x"))
            .unwrap();

        assert_eq!(call.history, HistoryKind::Hash);
        assert_eq!(call.options.basename.as_deref(), Some("/x"));
        assert_eq!(engine.calls(), vec![call]);
    }
}
