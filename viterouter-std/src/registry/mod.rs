//! Module registry.
//!
//! Maps canonical page keys to [`Loader`]s. A registry is built once,
//! from a raw glob table or a [`RegistryBuilder`], and is read-only after
//! that. Independent registries never share state.

/// Link-time page collection.
#[cfg(feature = "inventory")]
pub mod collected;
pub mod path;

use path::{INDEX, canonical_key, normalize_reference};
use std::collections::HashMap;
use viterouter_core::{Loader, ResolveError};

/// An immutable table of page loaders keyed by canonical path.
pub struct ModuleRegistry<M> {
    modules: HashMap<String, Loader<M>>,
}

impl<M> ModuleRegistry<M> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder<M> {
        RegistryBuilder::new()
    }

    /// Build a registry from a raw glob table.
    ///
    /// Every raw path is reduced to its canonical key. When two paths reduce
    /// to the same key, the later one wins.
    pub fn load<I, K>(raw_modules: I) -> Self
    where
        I: IntoIterator<Item = (K, Loader<M>)>,
        K: AsRef<str>,
    {
        RegistryBuilder::new().load(raw_modules).build()
    }

    /// Resolve a component reference to its loader.
    ///
    /// A leading `./` is ignored. References ending in `index` are first
    /// looked up as-is; every reference is then tried as `<reference>/index`.
    pub fn resolve(&self, reference: &str) -> Result<&Loader<M>, ResolveError> {
        let key = normalize_reference(reference);

        if key.ends_with(INDEX) {
            if let Some(loader) = self.modules.get(key) {
                #[cfg(feature = "tracing")]
                tracing::debug!(reference, key, "Resolved page module directly");
                return Ok(loader);
            }
        }

        let folder_key = format!("{key}/{INDEX}");
        match self.modules.get(&folder_key) {
            Some(loader) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(reference, key = %folder_key, "Resolved page module as folder index");
                Ok(loader)
            }
            None => Err(ResolveError::ModuleNotFound(reference.to_string())),
        }
    }

    /// Look up a canonical key exactly.
    pub fn get(&self, key: &str) -> Option<&Loader<M>> {
        self.modules.get(key)
    }

    /// Check whether a canonical key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.modules.contains_key(key)
    }

    /// All canonical keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<M> Default for ModuleRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for ModuleRegistry<M> {
    fn clone(&self) -> Self {
        Self {
            modules: self.modules.clone(),
        }
    }
}

impl<M> std::fmt::Debug for ModuleRegistry<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

/// Builder for constructing a [`ModuleRegistry`].
pub struct RegistryBuilder<M> {
    modules: HashMap<String, Loader<M>>,
}

impl<M> Default for RegistryBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> RegistryBuilder<M> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Register every entry of a raw glob table.
    pub fn load<I, K>(mut self, raw_modules: I) -> Self
    where
        I: IntoIterator<Item = (K, Loader<M>)>,
        K: AsRef<str>,
    {
        for (raw_path, loader) in raw_modules {
            self.insert(raw_path.as_ref(), loader);
        }
        self
    }

    /// Register a single raw path.
    pub fn register(mut self, raw_path: impl AsRef<str>, loader: Loader<M>) -> Self {
        self.insert(raw_path.as_ref(), loader);
        self
    }

    fn insert(&mut self, raw_path: &str, loader: Loader<M>) {
        let key = canonical_key(raw_path);
        #[cfg(feature = "tracing")]
        tracing::debug!(raw_path, key = %key, "Registering page module");

        if let Some(_previous) = self.modules.insert(key, loader) {
            #[cfg(feature = "tracing")]
            tracing::warn!(raw_path, "Page module key registered twice; keeping the later entry");
        }
    }

    /// Build the registry.
    pub fn build(self) -> ModuleRegistry<M> {
        ModuleRegistry {
            modules: self.modules,
        }
    }
}
