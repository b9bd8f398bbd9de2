//! Error types for viterouter.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ViteRouterError`] - Top-level error type for all viterouter operations
//! - [`ResolveError`] - Errors while resolving component references
//! - [`RouterError`] - Errors while selecting or building the engine router
//! - [`LoadError`] - Errors produced by page loaders at load time

use std::sync::Arc;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all viterouter operations.
#[derive(Error, Debug)]
pub enum ViteRouterError {
    /// A route could not be resolved against the module registry.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// The router engine could not be selected or built.
    #[error("router error: {0}")]
    Router(#[from] RouterError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while resolving component references.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Neither the direct key nor `<reference>/index` is registered.
    ///
    /// Carries the reference exactly as the caller wrote it.
    #[error("module not found: {0}")]
    ModuleNotFound(String),

    /// A descriptor sets both `path` and `index` (strict builds only).
    #[error("route `{0}` sets both `path` and `index`")]
    ConflictingRoute(String),
}

/// Errors that can occur while selecting or constructing a router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The navigation-strategy key is not one of `browser`, `hash`, `memory`.
    #[error("unsupported router type: {0}")]
    UnsupportedRouterType(String),

    /// A route path could not be compiled into a match pattern.
    #[error("invalid route pattern `{path}`: {reason}")]
    InvalidPattern {
        /// The full route path that failed to compile.
        path: String,
        /// Reason reported by the matcher.
        reason: String,
    },
}

/// Errors produced when a page loader runs.
///
/// Cloneable so a memoized load result can be handed to every waiter.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    /// The loader future itself failed.
    #[error("page loader failed")]
    Failed(#[source] Arc<dyn std::error::Error + Send + Sync + 'static>),

    /// A type-erased page produced a module of an unexpected type.
    #[error("page `{0}` produced a module of an unexpected type")]
    TypeMismatch(String),
}

impl LoadError {
    /// Wrap an arbitrary error as a loader failure.
    pub fn failed(err: impl Into<BoxError>) -> Self {
        LoadError::Failed(Arc::from(err.into()))
    }
}

// Convenience conversions
impl From<BoxError> for ViteRouterError {
    fn from(err: BoxError) -> Self {
        ViteRouterError::Custom(err)
    }
}

impl From<BoxError> for LoadError {
    fn from(err: BoxError) -> Self {
        LoadError::Failed(Arc::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_not_found_names_reference() {
        let err = ResolveError::ModuleNotFound("./about".to_string());
        assert_eq!(err.to_string(), "module not found: ./about");
    }

    #[test]
    fn test_top_level_wraps_router_error() {
        let err: ViteRouterError = RouterError::UnsupportedRouterType("headless".into()).into();
        assert!(matches!(
            err,
            ViteRouterError::Router(RouterError::UnsupportedRouterType(ref key)) if key == "headless"
        ));
        assert_eq!(
            err.to_string(),
            "router error: unsupported router type: headless"
        );
    }

    #[test]
    fn test_load_error_keeps_source() {
        use std::error::Error as _;

        let err = LoadError::failed("network down");
        assert_eq!(err.to_string(), "page loader failed");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("network down"));
    }
}
