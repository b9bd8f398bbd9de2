use super::{ModuleRegistry, RegistryBuilder};
use futures::future::{BoxFuture, FutureExt};
use std::any::{Any, TypeId};
use viterouter_core::{LoadError, Loader};

/// Type-erased page module produced by a collected loader.
pub type ErasedModule = Box<dyn Any + Send>;

/// A page submitted to the link-time page table via `inventory`.
///
/// Usually generated by the `#[page("...")]` attribute rather than written
/// by hand.
pub struct PageRegistration {
    /// Raw path, in the same form a glob table would use.
    pub path: &'static str,
    /// Type of the module the loader produces.
    pub module_type: fn() -> TypeId,
    /// Type-erased loader.
    pub load: fn() -> BoxFuture<'static, Result<ErasedModule, LoadError>>,
}

impl PageRegistration {
    /// Create a registration entry.
    pub const fn new(
        path: &'static str,
        module_type: fn() -> TypeId,
        load: fn() -> BoxFuture<'static, Result<ErasedModule, LoadError>>,
    ) -> Self {
        Self {
            path,
            module_type,
            load,
        }
    }
}

inventory::collect!(PageRegistration);

impl<M: Send + 'static> ModuleRegistry<M> {
    /// Build a registry from every collected page whose module type is `M`.
    ///
    /// Collection order is unspecified, so two pages sharing a canonical key
    /// resolve to an arbitrary one of them.
    pub fn from_inventory() -> Self {
        let target = TypeId::of::<M>();
        let mut builder = RegistryBuilder::new();

        for registration in inventory::iter::<PageRegistration> {
            if (registration.module_type)() == target {
                builder = builder.register(registration.path, erased_loader(registration));
            }
        }

        builder.build()
    }
}

/// Number of collected pages producing modules of type `M`.
pub fn page_count<M: 'static>() -> usize {
    let target = TypeId::of::<M>();
    inventory::iter::<PageRegistration>
        .into_iter()
        .filter(|registration| (registration.module_type)() == target)
        .count()
}

fn erased_loader<M: Send + 'static>(registration: &'static PageRegistration) -> Loader<M> {
    let load = registration.load;
    let path = registration.path;

    Loader::from_boxed(move || {
        load()
            .map(move |result| {
                result.and_then(|module| {
                    module
                        .downcast::<M>()
                        .map(|module| *module)
                        .map_err(|_| LoadError::TypeMismatch(path.to_string()))
                })
            })
            .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct CollectedPage(&'static str);

    fn collected_page_type() -> TypeId {
        TypeId::of::<CollectedPage>()
    }

    fn load_dashboard() -> BoxFuture<'static, Result<ErasedModule, LoadError>> {
        async { Ok(Box::new(CollectedPage("dashboard")) as ErasedModule) }.boxed()
    }

    fn load_wrong_type() -> BoxFuture<'static, Result<ErasedModule, LoadError>> {
        async { Ok(Box::new(42u8) as ErasedModule) }.boxed()
    }

    inventory::submit! {
        PageRegistration::new("./src/pages/dashboard/index.tsx", collected_page_type, load_dashboard)
    }

    inventory::submit! {
        PageRegistration::new("./src/pages/broken/index.tsx", collected_page_type, load_wrong_type)
    }

    #[tokio::test]
    async fn test_from_inventory_collects_matching_pages() {
        let registry = ModuleRegistry::<CollectedPage>::from_inventory();
        assert_eq!(page_count::<CollectedPage>(), 2);

        let loader = registry.resolve("dashboard").unwrap();
        assert_eq!(loader.load().await.unwrap(), CollectedPage("dashboard"));
    }

    #[tokio::test]
    async fn test_type_mismatch_surfaces_at_load() {
        let registry = ModuleRegistry::<CollectedPage>::from_inventory();
        let err = registry.resolve("./broken").unwrap().load().await.unwrap_err();
        assert!(matches!(err, LoadError::TypeMismatch(ref path) if path.contains("broken")));
    }

    #[test]
    fn test_other_module_types_ignored() {
        let registry = ModuleRegistry::<String>::from_inventory();
        assert!(registry.is_empty());
    }
}
