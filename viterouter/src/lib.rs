//! # viterouter - Page Tables to Router Configuration
//!
//! `viterouter` maps a build tool's page table (raw file paths to lazy page
//! loaders) onto a single-page-application route tree. Routes are authored
//! declaratively, each naming its page by a logical reference; the layer
//! resolves references to lazy components and hands the tree to a routing
//! engine.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use viterouter::prelude::*;
//!
//! let router = ViteRouter::with_modules([
//!     ("./src/pages/layout/index.tsx", Loader::new(|| async { Ok::<_, BoxError>(Page::Layout) })),
//!     ("./src/pages/home/index.tsx", Loader::new(|| async { Ok::<_, BoxError>(Page::Home) })),
//! ]);
//!
//! let routes = [RouteDescriptor::new("/").component("layout").children([
//!     RouteDescriptor::index_route().component("./home"),
//!     RouteDescriptor::new("*").redirect_to("/"),
//! ])];
//!
//! let app = router.create_router(&routes, RouterOptions::browser().basename("/app"))?;
//! ```

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

mod vite_router;

pub use vite_router::ViteRouter;

pub use viterouter_core::{
    // Errors
    BoxError,
    // Options
    CreateRouterOptions,
    HistoryKind,
    HistoryOptions,
    // Lazy boundary
    LazyComponent,
    LoadError,
    LoadFuture,
    // Loaders
    Loader,
    // Routes
    Redirect,
    Renderable,
    ResolveError,
    ResolvedRoute,
    RouteDescriptor,
    RouterEngine,
    RouterError,
    RouterOptions,
    ViteRouterError,
};

// Standard implementations
pub use viterouter_std::{
    ModuleRegistry, RegistryBuilder, RouteBuilder, RouteMatch, Router, StandardEngine,
};

/// Canonical key parsing.
pub mod path {
    pub use viterouter_std::registry::path::{INDEX, PAGES_DIR, canonical_key, normalize_reference};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use viterouter_std::testing::*;
}

/// Prelude module - common imports for viterouter.
///
/// # Usage
///
/// ```rust,ignore
/// use viterouter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError,
        HistoryKind,
        LazyComponent,
        Loader,
        ModuleRegistry,
        Renderable,
        RouteDescriptor,
        RouterEngine,
        RouterOptions,
        ViteRouter,
        ViteRouterError,
    };
}

#[cfg(feature = "macros")]
pub use viterouter_macros::page;

#[cfg(feature = "inventory")]
pub use inventory;
#[cfg(feature = "inventory")]
pub use viterouter_std::{ErasedModule, PageRegistration, page_count};
