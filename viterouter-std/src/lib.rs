//! # viterouter-std
//!
//! Standard implementations for the viterouter page-routing layer.
//!
//! This crate provides:
//! - **Module registry**: [`ModuleRegistry`], [`RegistryBuilder`], canonical key parsing
//! - **Route building**: [`RouteBuilder`]
//! - **Engine**: [`StandardEngine`] and its [`Router`]
//! - **Link-time pages**: `PageRegistration` (feature `inventory`)
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use viterouter_core;

// Modules
pub mod registry;
pub mod routing;
pub mod testing;

pub use registry::{ModuleRegistry, RegistryBuilder};
pub use routing::{RouteBuilder, RouteMatch, Router, StandardEngine};

#[cfg(feature = "inventory")]
pub use inventory;
#[cfg(feature = "inventory")]
pub use registry::collected::{ErasedModule, PageRegistration, page_count};
