//! Router construction options.
//!
//! # Navigation strategies
//!
//! | key | [`HistoryKind`] | location source |
//! |-----|-----------------|-----------------|
//! | `browser` | `Browser` | URL path |
//! | `hash` | `Hash` | URL fragment |
//! | `memory` | `Memory` | in-memory entry stack |
//!
//! Keys are looked up in a static `phf` table; anything else is rejected with
//! [`RouterError::UnsupportedRouterType`].

use crate::error::RouterError;
use phf::phf_map;
use std::{fmt, str::FromStr};

static HISTORY_KINDS: phf::Map<&'static str, HistoryKind> = phf_map! {
    "browser" => HistoryKind::Browser,
    "hash" => HistoryKind::Hash,
    "memory" => HistoryKind::Memory,
};

/// The navigation strategy a router is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HistoryKind {
    /// URL-path-based history (default).
    #[default]
    Browser,
    /// URL-fragment-based history.
    Hash,
    /// In-memory history, for tests and headless rendering.
    Memory,
}

impl HistoryKind {
    /// The string key for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            HistoryKind::Browser => "browser",
            HistoryKind::Hash => "hash",
            HistoryKind::Memory => "memory",
        }
    }

    /// Look up a kind by its string key.
    pub fn from_key(key: &str) -> Result<Self, RouterError> {
        HISTORY_KINDS
            .get(key)
            .copied()
            .ok_or_else(|| RouterError::UnsupportedRouterType(key.to_string()))
    }
}

impl FromStr for HistoryKind {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed options handed to a [`RouterEngine`](crate::RouterEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterOptions {
    /// Selected navigation strategy.
    pub history: HistoryKind,
    /// Base path the application is mounted under.
    pub basename: Option<String>,
    /// Initial history stack (memory history only).
    pub initial_entries: Vec<String>,
    /// Index into `initial_entries`; defaults to the last entry.
    pub initial_index: Option<usize>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            history: HistoryKind::Browser,
            basename: None,
            initial_entries: Vec::new(),
            initial_index: None,
        }
    }
}

impl RouterOptions {
    /// Options for the given strategy with no base path.
    pub fn new(history: HistoryKind) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    /// Browser history.
    pub fn browser() -> Self {
        Self::new(HistoryKind::Browser)
    }

    /// Hash history.
    pub fn hash() -> Self {
        Self::new(HistoryKind::Hash)
    }

    /// Memory history.
    pub fn memory() -> Self {
        Self::new(HistoryKind::Memory)
    }

    /// Set the base path.
    pub fn basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }

    /// Set the initial history stack (memory history).
    pub fn initial_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_entries = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initial entry index (memory history).
    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = Some(index);
        self
    }
}

/// Strategy selector in its untyped, configuration-file form.
///
/// A missing `type` means browser history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HistoryOptions {
    /// One of `browser`, `hash`, `memory`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            kind: HistoryKind::default().as_str().to_string(),
        }
    }
}

/// Router options as they appear in configuration.
///
/// The history key stays a raw string until [`into_router_options`] so an
/// unknown key is reported as [`RouterError::UnsupportedRouterType`] by the
/// router constructor rather than as a parse error.
///
/// [`into_router_options`]: CreateRouterOptions::into_router_options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CreateRouterOptions {
    /// Strategy selector; browser history when absent.
    pub history: Option<HistoryOptions>,
    /// Base path.
    pub base: Option<String>,
    /// Initial history stack (memory history).
    pub initial_entries: Vec<String>,
    /// Index into `initial_entries`.
    pub initial_index: Option<usize>,
}

impl CreateRouterOptions {
    /// Validate the strategy key and produce typed options.
    pub fn into_router_options(self) -> Result<RouterOptions, RouterError> {
        let history = match &self.history {
            Some(history) => HistoryKind::from_key(&history.kind)?,
            None => HistoryKind::default(),
        };
        Ok(RouterOptions {
            history,
            basename: self.base,
            initial_entries: self.initial_entries,
            initial_index: self.initial_index,
        })
    }
}
