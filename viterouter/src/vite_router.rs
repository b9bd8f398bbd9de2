//! The `ViteRouter` entry point.

use viterouter_core::{
    CreateRouterOptions, LazyComponent, Loader, ResolveError, RouteDescriptor, RouterEngine,
    RouterOptions, ViteRouterError,
};
use viterouter_std::{ModuleRegistry, RouteBuilder, StandardEngine};

/// Owns a page registry and builds routers from route descriptors.
///
/// Each instance carries its own registry, so several routers with
/// different page tables can live in one process.
pub struct ViteRouter<M, E = StandardEngine> {
    registry: ModuleRegistry<M>,
    engine: E,
    strict: bool,
}

impl<M: Clone> ViteRouter<M> {
    /// A router with an empty page table and the standard engine.
    pub fn new() -> Self {
        Self::from_registry(ModuleRegistry::new())
    }

    /// A router over a raw glob table.
    pub fn with_modules<I, K>(raw_modules: I) -> Self
    where
        I: IntoIterator<Item = (K, Loader<M>)>,
        K: AsRef<str>,
    {
        Self::from_registry(ModuleRegistry::load(raw_modules))
    }

    /// A router over an already built registry.
    pub fn from_registry(registry: ModuleRegistry<M>) -> Self {
        Self {
            registry,
            engine: StandardEngine,
            strict: false,
        }
    }
}

#[cfg(feature = "inventory")]
impl<M: Clone + Send + 'static> ViteRouter<M> {
    /// A router over every page registered with `#[page(...)]` for type `M`.
    pub fn from_inventory() -> Self {
        Self::from_registry(ModuleRegistry::from_inventory())
    }
}

impl<M: Clone> Default for ViteRouter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Clone, E> ViteRouter<M, E> {
    /// Swap the routing engine.
    pub fn with_engine<E2: RouterEngine<M>>(self, engine: E2) -> ViteRouter<M, E2> {
        ViteRouter {
            registry: self.registry,
            engine,
            strict: self.strict,
        }
    }

    /// Reject descriptors that set both `path` and `index`.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Replace the page table with a new raw glob table.
    pub fn load<I, K>(&mut self, raw_modules: I)
    where
        I: IntoIterator<Item = (K, Loader<M>)>,
        K: AsRef<str>,
    {
        self.registry = ModuleRegistry::load(raw_modules);
    }

    /// The current page table.
    pub fn registry(&self) -> &ModuleRegistry<M> {
        &self.registry
    }

    /// The routing engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Resolve a component reference to its loader.
    pub fn import(&self, reference: &str) -> Result<&Loader<M>, ResolveError> {
        self.registry.resolve(reference)
    }

    /// Resolve a component reference and wrap it in a lazy boundary.
    pub fn lazy(&self, reference: &str) -> Result<LazyComponent<M>, ResolveError> {
        self.builder().lazy(reference)
    }

    fn builder(&self) -> RouteBuilder<'_, M> {
        let builder = RouteBuilder::new(&self.registry);
        if self.strict { builder.strict() } else { builder }
    }
}

impl<M: Clone, E: RouterEngine<M>> ViteRouter<M, E> {
    /// Resolve `routes` and build a router with the engine constructor
    /// selected by `options.history`.
    ///
    /// Any unresolved component anywhere in the tree aborts construction.
    pub fn create_router(
        &self,
        routes: &[RouteDescriptor],
        options: RouterOptions,
    ) -> Result<E::Router, ViteRouterError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            history = %options.history,
            routes = routes.len(),
            "Building route tree"
        );

        let resolved = self.builder().build(routes)?;
        let router = self.engine.create(resolved, options)?;
        Ok(router)
    }

    /// Like [`create_router`](Self::create_router), taking options in their
    /// configuration form.
    ///
    /// The history key is checked before any route is resolved.
    pub fn create_router_from(
        &self,
        routes: &[RouteDescriptor],
        options: CreateRouterOptions,
    ) -> Result<E::Router, ViteRouterError> {
        let options = options.into_router_options()?;
        self.create_router(routes, options)
    }
}

impl<M: Clone, E: std::fmt::Debug> std::fmt::Debug for ViteRouter<M, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViteRouter")
            .field("registry", &self.registry)
            .field("engine", &self.engine)
            .field("strict", &self.strict)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viterouter_core::{HistoryKind, RouterError};
    use viterouter_std::testing::{RecordingEngine, module_map};

    fn pages() -> ViteRouter<&'static str> {
        ViteRouter::with_modules(module_map([
            ("./src/pages/home/index.tsx", "home"),
            ("./src/pages/about.tsx", "about"),
        ]))
    }

    #[test]
    fn test_import_and_lazy() {
        let router = pages();
        assert!(router.import("./home").is_ok());
        assert_eq!(router.lazy("home").unwrap().reference(), "home");
        assert_eq!(
            router.import("about").unwrap_err(),
            ResolveError::ModuleNotFound("about".to_string())
        );
    }

    #[test]
    fn test_load_replaces_table() {
        let mut router = pages();
        router.load(module_map([("./src/pages/contact/index.tsx", "contact")]));

        assert_eq!(router.registry().len(), 1);
        assert!(router.import("contact").is_ok());
        assert!(router.import("home").is_err());
    }

    #[test]
    fn test_unsupported_type_checked_before_resolution() {
        let router = pages().with_engine(RecordingEngine::new());
        let routes = [RouteDescriptor::new("/").component("missing")];
        let options = CreateRouterOptions {
            history: Some(viterouter_core::HistoryOptions {
                kind: "headless".to_string(),
            }),
            ..CreateRouterOptions::default()
        };

        let err = router.create_router_from(&routes, options).unwrap_err();
        assert!(matches!(
            err,
            ViteRouterError::Router(RouterError::UnsupportedRouterType(ref key)) if key == "headless"
        ));
        assert_eq!(router.engine().count(), 0);
    }

    #[test]
    fn test_engine_receives_options() {
        let router = pages().with_engine(RecordingEngine::new());
        let routes = [RouteDescriptor::new("/").component("home")];

        let call = router
            .create_router(&routes, RouterOptions::memory().basename("/base"))
            .unwrap();
        assert_eq!(call.history, HistoryKind::Memory);
        assert_eq!(call.routes, 1);
        assert_eq!(call.options.basename.as_deref(), Some("/base"));
    }

    #[test]
    fn test_strict_mode_propagates() {
        let router = pages().strict();
        let routes = [RouteDescriptor::new("/").index().component("home")];

        assert!(matches!(
            router.create_router(&routes, RouterOptions::default()),
            Err(ViteRouterError::Resolve(ResolveError::ConflictingRoute(_)))
        ));
    }
}
