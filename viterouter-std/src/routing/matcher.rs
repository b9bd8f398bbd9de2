//! Location matching over a resolved route tree.
//!
//! # Compilation
//! ```text
//! ResolvedRoute tree
//!     → flatten (children before parent, siblings in order)
//!     → join paths (`users` under `/` becomes `/users`)
//!     → expand optional segments (`/:lang?/about` → `/:lang/about`, `/about`)
//!     → translate (`:id` → `{id}`, `*` → `{*__splat}`)
//!     → matchit::Router<MatchTarget>
//! ```
//!
//! # Design Decisions
//! - Index routes match at their parent's full path, ahead of the parent
//! - Pathless layout routes are never targets on their own
//! - The first route declared for a pattern keeps it, including patterns
//!   that differ only in parameter names (`/:lang` and `/:slug`)
//! - A pattern with `*` before its last segment is never a target

use matchit::{InsertError, Router as InnerRouter};
use viterouter_core::{ResolvedRoute, RouterError};

const SPLAT: &str = "__splat";

/// A compiled match target: the full pattern and the child-index path to it.
#[derive(Debug, Clone)]
pub(crate) struct MatchTarget {
    pub(crate) pattern: String,
    pub(crate) chain: Vec<usize>,
}

/// A matchit router over flattened route patterns.
pub(crate) struct RouteMatcher {
    inner: InnerRouter<MatchTarget>,
    len: usize,
}

impl RouteMatcher {
    /// Compile every addressable route in `routes`.
    pub(crate) fn compile<M: Clone>(routes: &[ResolvedRoute<M>]) -> Result<Self, RouterError> {
        let mut targets = Vec::new();
        flatten(routes, "/", &mut Vec::new(), &mut targets);

        let mut inner = InnerRouter::new();
        let mut len = 0;
        for target in targets {
            for pattern in expand_optional(&target.pattern) {
                if !splat_is_terminal(&pattern) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(pattern = %target.pattern, "Skipping route nested under a splat");
                    continue;
                }

                match inner.insert(to_matchit(&pattern), target.clone()) {
                    Ok(()) => len += 1,
                    Err(InsertError::Conflict { .. }) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            pattern = %target.pattern,
                            "Pattern already claimed by an earlier route"
                        );
                    }
                    Err(e) => {
                        return Err(RouterError::InvalidPattern {
                            path: target.pattern.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self { inner, len })
    }

    /// Match a normalized path.
    pub(crate) fn at(&self, path: &str) -> Option<(&MatchTarget, Vec<(String, String)>)> {
        let matched = self.inner.at(path).ok()?;
        let params = matched
            .params
            .iter()
            .map(|(key, value)| {
                let key = if key == SPLAT { "*" } else { key };
                (key.to_string(), value.to_string())
            })
            .collect();
        Some((matched.value, params))
    }

    /// Number of distinct compiled patterns.
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

fn flatten<M: Clone>(
    routes: &[ResolvedRoute<M>],
    parent: &str,
    chain: &mut Vec<usize>,
    out: &mut Vec<MatchTarget>,
) {
    for (position, route) in routes.iter().enumerate() {
        chain.push(position);

        let full = match (&route.path, route.index) {
            (Some(path), false) => join_paths(parent, path),
            _ => parent.to_string(),
        };

        flatten(route.children(), &full, chain, out);

        if route.index || route.path.is_some() {
            out.push(MatchTarget {
                pattern: full,
                chain: chain.clone(),
            });
        }

        chain.pop();
    }
}

/// Join a child path onto its parent; absolute children replace the parent.
pub(crate) fn join_paths(parent: &str, child: &str) -> String {
    let joined = if child.starts_with('/') {
        child.to_string()
    } else {
        format!("{parent}/{child}")
    };
    normalize_path(&joined)
}

/// Collapse empty segments and force a single leading slash.
pub(crate) fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Expand every optional segment (`:id?`, `about?`) into the patterns with
/// and without it, longest first.
fn expand_optional(pattern: &str) -> Vec<String> {
    let mut expanded = vec![String::new()];
    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        match segment.strip_suffix('?') {
            Some(required) => {
                let mut with: Vec<String> = expanded
                    .iter()
                    .map(|prefix| format!("{prefix}/{required}"))
                    .collect();
                with.append(&mut expanded);
                expanded = with;
            }
            None => {
                for prefix in &mut expanded {
                    prefix.push('/');
                    prefix.push_str(segment);
                }
            }
        }
    }

    expanded
        .into_iter()
        .map(|path| if path.is_empty() { "/".to_string() } else { path })
        .collect()
}

fn splat_is_terminal(pattern: &str) -> bool {
    let mut segments = pattern.split('/').filter(|s| !s.is_empty()).rev();
    segments.next();
    segments.all(|segment| segment != "*")
}

fn to_matchit(pattern: &str) -> String {
    let segments: Vec<String> = pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            if segment == "*" {
                format!("{{*{SPLAT}}}")
            } else if let Some(name) = segment.strip_prefix(':') {
                format!("{{{name}}}")
            } else {
                segment.replace('{', "{{").replace('}', "}}")
            }
        })
        .collect();
    format!("/{}", segments.join("/"))
}
