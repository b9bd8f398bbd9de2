//! Route descriptors and resolved routes.
//!
//! A [`RouteDescriptor`] is what the application authors. A [`ResolvedRoute`]
//! is what an engine consumes: the same shape, with every component
//! reference replaced by a [`Renderable`].

use crate::lazy::LazyComponent;
use std::fmt;

/// A declarative route entry.
///
/// No field is required. `component` is a logical reference into the module
/// registry, not a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RouteDescriptor {
    /// URL pattern segment for this route.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub path: Option<String>,

    /// Marks the route as its parent's index route.
    pub index: bool,

    /// Logical reference to a page module.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub component: Option<String>,

    /// Optional route name for lookups.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,

    /// Nested routes, in priority order.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<RouteDescriptor>,

    /// Navigate to this target instead of rendering a component.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub redirect_to: Option<String>,
}

impl RouteDescriptor {
    /// Create a descriptor for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Create an index descriptor (no path).
    pub fn index_route() -> Self {
        Self {
            index: true,
            ..Self::default()
        }
    }

    /// Create a pathless layout descriptor hosting `children`.
    pub fn layout(children: impl IntoIterator<Item = RouteDescriptor>) -> Self {
        Self::default().children(children)
    }

    /// Set the component reference.
    pub fn component(mut self, reference: impl Into<String>) -> Self {
        self.component = Some(reference.into());
        self
    }

    /// Set the redirect target.
    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect_to = Some(target.into());
        self
    }

    /// Set the route name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append children.
    pub fn children(mut self, children: impl IntoIterator<Item = RouteDescriptor>) -> Self {
        self.children.extend(children);
        self
    }

    /// Mark as an index route.
    pub fn index(mut self) -> Self {
        self.index = true;
        self
    }

    /// A short label for logs and errors.
    pub fn label(&self) -> &str {
        match (&self.path, &self.name) {
            (Some(path), _) => path.as_str(),
            (None, Some(name)) => name.as_str(),
            (None, None) if self.index => "<index>",
            (None, None) => "<layout>",
        }
    }
}

/// A navigation directive rendered in place of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Navigation target.
    pub to: String,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

impl Redirect {
    /// A replacing redirect to `to`.
    pub fn replace(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            replace: true,
        }
    }
}

/// What a resolved route renders.
pub enum Renderable<M: Clone> {
    /// A lazily loaded page component.
    Lazy(LazyComponent<M>),
    /// A navigation directive.
    Redirect(Redirect),
    /// Nothing; the route only hosts children.
    Empty,
}

impl<M: Clone> Renderable<M> {
    /// Returns the lazy component, if any.
    pub fn as_lazy(&self) -> Option<&LazyComponent<M>> {
        match self {
            Renderable::Lazy(lazy) => Some(lazy),
            _ => None,
        }
    }

    /// Returns the redirect directive, if any.
    pub fn as_redirect(&self) -> Option<&Redirect> {
        match self {
            Renderable::Redirect(redirect) => Some(redirect),
            _ => None,
        }
    }

    /// Returns true for the empty placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self, Renderable::Empty)
    }
}

impl<M: Clone> Clone for Renderable<M> {
    fn clone(&self) -> Self {
        match self {
            Renderable::Lazy(lazy) => Renderable::Lazy(lazy.clone()),
            Renderable::Redirect(redirect) => Renderable::Redirect(redirect.clone()),
            Renderable::Empty => Renderable::Empty,
        }
    }
}

impl<M: Clone> fmt::Debug for Renderable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderable::Lazy(lazy) => f.debug_tuple("Lazy").field(lazy).finish(),
            Renderable::Redirect(redirect) => f.debug_tuple("Redirect").field(redirect).finish(),
            Renderable::Empty => f.write_str("Empty"),
        }
    }
}

/// A router-ready route entry.
pub struct ResolvedRoute<M: Clone> {
    /// Passed through from the descriptor.
    pub path: Option<String>,
    /// Passed through from the descriptor.
    pub index: bool,
    /// Passed through from the descriptor.
    pub name: Option<String>,
    /// What this route renders.
    pub renderable: Renderable<M>,
    /// Resolved children; `None` when the descriptor had none.
    pub children: Option<Vec<ResolvedRoute<M>>>,
}

impl<M: Clone> ResolvedRoute<M> {
    /// Children as a slice (empty when absent).
    pub fn children(&self) -> &[ResolvedRoute<M>] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Depth of the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ResolvedRoute::depth)
            .max()
            .unwrap_or(0)
    }
}

impl<M: Clone> Clone for ResolvedRoute<M> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            index: self.index,
            name: self.name.clone(),
            renderable: self.renderable.clone(),
            children: self.children.clone(),
        }
    }
}

impl<M: Clone> fmt::Debug for ResolvedRoute<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedRoute")
            .field("path", &self.path)
            .field("index", &self.index)
            .field("name", &self.name)
            .field("renderable", &self.renderable)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let route = RouteDescriptor::new("/")
            .component("layout")
            .children([RouteDescriptor::index_route().component("home")]);

        assert_eq!(route.path.as_deref(), Some("/"));
        assert_eq!(route.component.as_deref(), Some("layout"));
        assert_eq!(route.children.len(), 1);
        assert!(route.children[0].index);
        assert_eq!(route.children[0].label(), "<index>");
    }

    #[test]
    fn test_resolved_depth() {
        let leaf: ResolvedRoute<()> = ResolvedRoute {
            path: Some("c".into()),
            index: false,
            name: None,
            renderable: Renderable::Empty,
            children: None,
        };
        let root = ResolvedRoute {
            path: Some("a".into()),
            index: false,
            name: None,
            renderable: Renderable::Empty,
            children: Some(vec![leaf]),
        };
        assert_eq!(root.depth(), 2);
        assert!(root.children()[0].children().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_descriptor_from_json() {
        let json = r#"{
            "path": "/",
            "children": [
                { "index": true, "component": "./home" },
                { "path": "old", "redirectTo": "/new" }
            ]
        }"#;
        let route: RouteDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(route.children.len(), 2);
        assert_eq!(route.children[0].component.as_deref(), Some("./home"));
        assert_eq!(route.children[1].redirect_to.as_deref(), Some("/new"));
    }
}
