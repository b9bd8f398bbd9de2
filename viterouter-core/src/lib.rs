//! # viterouter-core
//!
//! Core types for the viterouter page-routing layer.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! engine integrations that don't need the full `viterouter-std`
//! implementation.
//!
//! # Pipeline
//!
//! viterouter turns a build tool's page table into a router configuration in
//! three steps, each owned by a distinct type:
//!
//! ## Step 1: Modules ([`Loader`])
//!
//! A page module is reachable only through a zero-argument factory returning
//! a future. The layer hands factories around and never awaits them during
//! construction.
//!
//! ## Step 2: Routes ([`RouteDescriptor`] -> [`ResolvedRoute`])
//!
//! Descriptors are authored by the application. Resolution replaces each
//! `component` reference with a [`LazyComponent`], each `redirect_to` with a
//! [`Redirect`] directive, and everything else with an empty placeholder.
//!
//! ## Step 3: Engine ([`RouterEngine`])
//!
//! The resolved tree is handed to an engine constructor selected by
//! [`HistoryKind`], together with pass-through [`RouterOptions`].
//!
//! # Error Types
//!
//! - [`ViteRouterError`] - Top-level error type
//! - [`ResolveError`] - Registry and descriptor resolution errors
//! - [`RouterError`] - Engine selection and construction errors
//! - [`LoadError`] - Page loader failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod engine;
mod error;
mod lazy;
mod loader;
mod options;
mod route;

// Re-exports
pub use engine::RouterEngine;
pub use error::{BoxError, LoadError, ResolveError, RouterError, ViteRouterError};
pub use lazy::LazyComponent;
pub use loader::{LoadFuture, Loader};
pub use options::{CreateRouterOptions, HistoryKind, HistoryOptions, RouterOptions};
pub use route::{Redirect, Renderable, ResolvedRoute, RouteDescriptor};
