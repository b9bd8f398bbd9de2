//! # Engine Layer
//!
//! A [`RouterEngine`] turns a resolved route tree into a concrete router
//! instance. It offers one constructor per navigation strategy, the same way
//! a client-side routing library exposes a browser, a hash and a memory
//! router factory. Which constructor runs is decided by
//! [`RouterOptions::history`].
//!
//! Everything past construction (navigation, history, subscriptions) belongs
//! to the engine's router type.

use crate::{
    error::RouterError,
    options::{HistoryKind, RouterOptions},
    route::ResolvedRoute,
};

/// Builds router instances from resolved route trees.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot build routers for page modules of type `{M}`",
    label = "missing `RouterEngine` implementation",
    note = "Implement `RouterEngine<{M}>` to plug a routing engine into viterouter."
)]
pub trait RouterEngine<M: Clone> {
    /// The router instance this engine produces.
    type Router;

    /// Build a URL-path-based router.
    fn create_browser_router(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError>;

    /// Build a URL-fragment-based router.
    fn create_hash_router(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError>;

    /// Build an in-memory router.
    fn create_memory_router(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError>;

    /// Dispatch to the constructor selected by `options.history`.
    fn create(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError> {
        match options.history {
            HistoryKind::Browser => self.create_browser_router(routes, options),
            HistoryKind::Hash => self.create_hash_router(routes, options),
            HistoryKind::Memory => self.create_memory_router(routes, options),
        }
    }
}
