//! The built-in routing engine.
//!
//! [`StandardEngine`] builds a [`Router`]: the resolved route tree, the
//! selected history strategy and a compiled matcher. It covers what a
//! headless consumer needs (inspection and location matching); rendering
//! and live navigation belong to the UI layer driving it.

use super::matcher::{RouteMatcher, normalize_path};
use viterouter_core::{HistoryKind, ResolvedRoute, RouterEngine, RouterError, RouterOptions};

/// Engine producing [`Router`] instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEngine;

impl<M: Clone> RouterEngine<M> for StandardEngine {
    type Router = Router<M>;

    fn create_browser_router(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError> {
        Router::compile(History::Browser, routes, options.basename)
    }

    fn create_hash_router(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError> {
        Router::compile(History::Hash, routes, options.basename)
    }

    fn create_memory_router(
        &self,
        routes: Vec<ResolvedRoute<M>>,
        options: RouterOptions,
    ) -> Result<Self::Router, RouterError> {
        let mut entries = options.initial_entries;
        if entries.is_empty() {
            entries.push("/".to_string());
        }
        let last = entries.len() - 1;
        let index = options.initial_index.map_or(last, |index| index.min(last));

        Router::compile(History::Memory { entries, index }, routes, options.basename)
    }
}

#[derive(Debug, Clone)]
enum History {
    Browser,
    Hash,
    Memory { entries: Vec<String>, index: usize },
}

/// A router instance built by [`StandardEngine`].
pub struct Router<M: Clone> {
    history: History,
    basename: Option<String>,
    routes: Vec<ResolvedRoute<M>>,
    matcher: RouteMatcher,
}

/// The routes matched by a location, outermost first.
pub struct RouteMatch<'r, M: Clone> {
    /// Full pattern of the deepest matched route.
    pub pattern: &'r str,
    /// Matched route chain, root to leaf.
    pub routes: Vec<&'r ResolvedRoute<M>>,
    /// Captured path parameters; a trailing `*` is captured under `"*"`.
    pub params: Vec<(String, String)>,
}

impl<'r, M: Clone> RouteMatch<'r, M> {
    /// The deepest matched route.
    pub fn leaf(&self) -> Option<&'r ResolvedRoute<M>> {
        self.routes.last().copied()
    }

    /// Look up a captured parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl<M: Clone> Router<M> {
    fn compile(
        history: History,
        routes: Vec<ResolvedRoute<M>>,
        basename: Option<String>,
    ) -> Result<Self, RouterError> {
        let matcher = RouteMatcher::compile(&routes)?;
        let basename = basename
            .map(|base| normalize_path(&base))
            .filter(|base| base != "/");

        #[cfg(feature = "tracing")]
        tracing::info!(
            history = ?history,
            basename = ?basename,
            routes = routes.len(),
            patterns = matcher.len(),
            "Router created"
        );

        Ok(Self {
            history,
            basename,
            routes,
            matcher,
        })
    }

    /// The navigation strategy this router was built with.
    pub fn history(&self) -> HistoryKind {
        match self.history {
            History::Browser => HistoryKind::Browser,
            History::Hash => HistoryKind::Hash,
            History::Memory { .. } => HistoryKind::Memory,
        }
    }

    /// The normalized base path, if any.
    pub fn basename(&self) -> Option<&str> {
        self.basename.as_deref()
    }

    /// The resolved route tree.
    pub fn routes(&self) -> &[ResolvedRoute<M>] {
        &self.routes
    }

    /// Number of distinct addressable patterns.
    pub fn pattern_count(&self) -> usize {
        self.matcher.len()
    }

    /// The starting location of a memory router.
    pub fn initial_location(&self) -> Option<&str> {
        match &self.history {
            History::Memory { entries, index } => entries.get(*index).map(String::as_str),
            _ => None,
        }
    }

    /// The memory router's initial history stack.
    pub fn initial_entries(&self) -> &[String] {
        match &self.history {
            History::Memory { entries, .. } => entries,
            _ => &[],
        }
    }

    /// Match a location against the route tree.
    ///
    /// Browser and memory routers read the path (query and fragment are
    /// ignored); hash routers read the fragment. The basename, when set,
    /// must prefix the path and is removed before matching.
    pub fn match_location(&self, location: &str) -> Option<RouteMatch<'_, M>> {
        let path = self.route_path(location)?;
        let (target, params) = self.matcher.at(&path)?;

        let mut routes = Vec::with_capacity(target.chain.len());
        let mut level = self.routes.as_slice();
        for &position in &target.chain {
            let route = level.get(position)?;
            routes.push(route);
            level = route.children();
        }

        Some(RouteMatch {
            pattern: &target.pattern,
            routes,
            params,
        })
    }

    /// Find the first route (depth-first) with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&ResolvedRoute<M>> {
        find_named(&self.routes, name)
    }

    fn route_path(&self, location: &str) -> Option<String> {
        let raw = match self.history {
            History::Hash => location.split_once('#').map_or("/", |(_, fragment)| fragment),
            History::Browser | History::Memory { .. } => location,
        };
        let raw = raw.split(['?', '#']).next().unwrap_or_default();
        let path = normalize_path(raw);

        match &self.basename {
            None => Some(path),
            Some(base) if path == *base => Some("/".to_string()),
            Some(base) => path
                .strip_prefix(base.as_str())
                .filter(|rest| rest.starts_with('/'))
                .map(str::to_string),
        }
    }
}

fn find_named<'r, M: Clone>(routes: &'r [ResolvedRoute<M>], name: &str) -> Option<&'r ResolvedRoute<M>> {
    routes.iter().find_map(|route| {
        if route.name.as_deref() == Some(name) {
            Some(route)
        } else {
            find_named(route.children(), name)
        }
    })
}

impl<M: Clone> std::fmt::Debug for Router<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("history", &self.history())
            .field("basename", &self.basename)
            .field("routes", &self.routes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viterouter_core::{Redirect, Renderable};

    fn route(path: Option<&str>, name: Option<&str>, children: Vec<ResolvedRoute<()>>) -> ResolvedRoute<()> {
        ResolvedRoute {
            path: path.map(str::to_string),
            index: false,
            name: name.map(str::to_string),
            renderable: Renderable::Empty,
            children: if children.is_empty() { None } else { Some(children) },
        }
    }

    fn tree() -> Vec<ResolvedRoute<()>> {
        let mut index = route(None, Some("home"), vec![]);
        index.index = true;
        let mut legacy = route(Some("legacy"), None, vec![]);
        legacy.renderable = Renderable::Redirect(Redirect::replace("/"));

        vec![route(
            Some("/"),
            Some("root"),
            vec![
                index,
                route(Some("users"), None, vec![route(Some(":id"), Some("user"), vec![])]),
                legacy,
            ],
        )]
    }

    #[test]
    fn test_browser_matching_with_basename() {
        let router = StandardEngine
            .create(tree(), RouterOptions::browser().basename("/app/"))
            .unwrap();

        assert_eq!(router.history(), HistoryKind::Browser);
        assert_eq!(router.basename(), Some("/app"));

        let matched = router.match_location("/app/users/7?tab=posts").unwrap();
        assert_eq!(matched.pattern, "/users/:id");
        assert_eq!(matched.routes.len(), 3);
        assert_eq!(matched.param("id"), Some("7"));
        assert_eq!(matched.leaf().unwrap().name.as_deref(), Some("user"));

        let root = router.match_location("/app").unwrap();
        assert!(root.leaf().unwrap().index);

        assert!(router.match_location("/users/7").is_none());
        assert!(router.match_location("/application").is_none());
    }

    #[test]
    fn test_hash_reads_fragment() {
        let router = StandardEngine.create(tree(), RouterOptions::hash()).unwrap();

        let matched = router.match_location("https://example.com/ignored#/legacy").unwrap();
        assert!(matched.leaf().unwrap().renderable.as_redirect().is_some());

        let root = router.match_location("https://example.com/users").unwrap();
        assert_eq!(root.pattern, "/");
    }

    #[test]
    fn test_memory_initial_location() {
        let router = StandardEngine
            .create(tree(), RouterOptions::memory().initial_entries(["/", "/users/1"]))
            .unwrap();
        assert_eq!(router.initial_location(), Some("/users/1"));

        let router = StandardEngine
            .create(
                tree(),
                RouterOptions::memory().initial_entries(["/", "/users/1"]).initial_index(9),
            )
            .unwrap();
        assert_eq!(router.initial_location(), Some("/users/1"));

        let router = StandardEngine.create(tree(), RouterOptions::memory()).unwrap();
        assert_eq!(router.initial_entries(), &["/".to_string()]);
        assert_eq!(router.initial_location(), Some("/"));
    }

    #[test]
    fn test_browser_has_no_initial_location() {
        let router = StandardEngine.create(tree(), RouterOptions::browser()).unwrap();
        assert_eq!(router.initial_location(), None);
        assert!(router.initial_entries().is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let router = StandardEngine.create(tree(), RouterOptions::default()).unwrap();
        assert_eq!(router.find_by_name("user").unwrap().path.as_deref(), Some(":id"));
        assert!(router.find_by_name("missing").is_none());
        assert_eq!(router.pattern_count(), 4);
    }
}
