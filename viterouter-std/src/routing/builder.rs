//! Route tree resolution.
//!
//! [`RouteBuilder`] walks a descriptor tree depth-first, in declaration
//! order, and produces the equivalent [`ResolvedRoute`] tree:
//!
//! - `redirect_to` set: a replacing [`Redirect`]; the registry is not consulted
//! - else `component` set: a [`LazyComponent`] over the resolved loader
//! - else: an empty placeholder
//!
//! The first resolution failure aborts the whole build.

use crate::registry::ModuleRegistry;
use viterouter_core::{
    LazyComponent, Redirect, Renderable, ResolveError, ResolvedRoute, RouteDescriptor,
};

/// Resolves descriptor trees against a borrowed [`ModuleRegistry`].
pub struct RouteBuilder<'r, M> {
    registry: &'r ModuleRegistry<M>,
    strict: bool,
}

impl<'r, M: Clone> RouteBuilder<'r, M> {
    /// Create a builder over `registry`.
    pub fn new(registry: &'r ModuleRegistry<M>) -> Self {
        Self {
            registry,
            strict: false,
        }
    }

    /// Reject descriptors that set both `path` and `index`.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Resolve a list of sibling descriptors, preserving order.
    pub fn build(&self, descriptors: &[RouteDescriptor]) -> Result<Vec<ResolvedRoute<M>>, ResolveError> {
        descriptors
            .iter()
            .map(|descriptor| self.build_route(descriptor))
            .collect()
    }

    /// Resolve a single component reference into a lazy boundary.
    pub fn lazy(&self, reference: &str) -> Result<LazyComponent<M>, ResolveError> {
        let loader = self.registry.resolve(reference)?;
        Ok(LazyComponent::new(reference, loader.clone()))
    }

    fn build_route(&self, descriptor: &RouteDescriptor) -> Result<ResolvedRoute<M>, ResolveError> {
        if self.strict && descriptor.index && descriptor.path.is_some() {
            return Err(ResolveError::ConflictingRoute(descriptor.label().to_string()));
        }

        let redirect = descriptor.redirect_to.as_deref().filter(|to| !to.is_empty());
        let component = descriptor.component.as_deref().filter(|c| !c.is_empty());

        let renderable = match (redirect, component) {
            (Some(to), _) => Renderable::Redirect(Redirect::replace(to)),
            (None, Some(reference)) => Renderable::Lazy(self.lazy(reference)?),
            (None, None) => Renderable::Empty,
        };

        let children = if descriptor.children.is_empty() {
            None
        } else {
            Some(self.build(&descriptor.children)?)
        };

        Ok(ResolvedRoute {
            path: descriptor.path.clone(),
            index: descriptor.index,
            name: descriptor.name.clone(),
            renderable,
            children,
        })
    }
}
