use viterouter::{
    Loader, ModuleRegistry, ResolveError,
    path::canonical_key,
    testing::{CountingLoader, module_map},
};

mod common;
use common::{Page, page_table};

#[test]
fn test_canonical_keys_from_page_table() {
    let counter = CountingLoader::new();
    let registry = ModuleRegistry::load(page_table(&counter));

    assert_eq!(
        registry.keys(),
        vec![
            "about",
            "home/index",
            "layout/index",
            "settings/index",
            "users/detail/index",
            "users/index",
        ]
    );
}

#[test]
fn test_folder_pages_resolve_by_name() {
    let counter = CountingLoader::new();
    let table = page_table(&counter);
    let home = table[1].1.clone();
    let registry = ModuleRegistry::load(table);

    for reference in ["home", "./home", "home/index", "./home/index"] {
        assert!(registry.resolve(reference).unwrap().ptr_eq(&home), "{reference}");
    }
}

#[test]
fn test_flat_page_is_not_a_folder_index() {
    let counter = CountingLoader::new();
    let registry = ModuleRegistry::load(page_table(&counter));

    assert_eq!(
        registry.resolve("about").unwrap_err(),
        ResolveError::ModuleNotFound("about".to_string())
    );
    assert!(registry.contains("about"));
}

#[test]
fn test_unregistered_reference_names_original() {
    let registry: ModuleRegistry<Page> = ModuleRegistry::new();

    for reference in ["./missing", "missing/index", "a//b"] {
        assert_eq!(
            registry.resolve(reference).unwrap_err(),
            ResolveError::ModuleNotFound(reference.to_string())
        );
    }
}

#[test]
fn test_later_duplicate_wins() {
    let first = Loader::ready(Page::Home);
    let second = Loader::ready(Page::About);
    let registry = ModuleRegistry::load([
        ("./src/pages/home/index.tsx", first),
        ("./src/pages/home/index.jsx", second.clone()),
    ]);

    assert_eq!(registry.len(), 1);
    assert!(registry.resolve("home").unwrap().ptr_eq(&second));
}

#[test]
fn test_registries_are_independent() {
    let a = ModuleRegistry::load(module_map([("./src/pages/a/index.tsx", 1u8)]));
    let b = ModuleRegistry::load(module_map([("./src/pages/b/index.tsx", 2u8)]));

    assert!(a.resolve("a").is_ok() && a.resolve("b").is_err());
    assert!(b.resolve("b").is_ok() && b.resolve("a").is_err());
}

#[test]
fn test_canonical_key_edge_cases() {
    assert_eq!(canonical_key("./src/pages/about.tsx"), "about");
    assert_eq!(canonical_key("/src/pages//blog///index.tsx"), "blog/index");
    assert_eq!(canonical_key("./src/pages/blog/[slug]/index.tsx"), "blog/index");
}
