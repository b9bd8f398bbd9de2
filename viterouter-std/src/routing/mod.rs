//! # Routing
//!
//! Turning descriptors into a router instance:
//!
//! - [`RouteBuilder`]: descriptor tree → resolved tree, against a registry
//! - [`StandardEngine`]: resolved tree → [`Router`] with location matching
//!
//! Any other [`RouterEngine`](viterouter_core::RouterEngine) implementation
//! can consume the same resolved tree.

pub mod builder;
pub mod engine;
mod matcher;

pub use builder::RouteBuilder;
pub use engine::{RouteMatch, Router, StandardEngine};
