#![allow(dead_code)]

use viterouter::{Loader, ViteRouter, testing::CountingLoader};

// ============================================================================
// Test Page Types
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Layout,
    Home,
    About,
    Users,
    UserDetail,
    Settings,
}

// ============================================================================
// Page Tables
// ============================================================================

/// A glob table shaped like a typical `src/pages` tree.
pub fn page_table(counter: &CountingLoader) -> Vec<(&'static str, Loader<Page>)> {
    vec![
        ("./src/pages/layout/index.tsx", counter.loader(Page::Layout)),
        ("./src/pages/home/index.tsx", counter.loader(Page::Home)),
        ("./src/pages/about.tsx", counter.loader(Page::About)),
        ("./src/pages/users/index.jsx", counter.loader(Page::Users)),
        ("./src/pages/users/detail/index.ts", counter.loader(Page::UserDetail)),
        ("./src/pages/settings/[tab]/index.tsx", counter.loader(Page::Settings)),
    ]
}

pub fn app(counter: &CountingLoader) -> ViteRouter<Page> {
    ViteRouter::with_modules(page_table(counter))
}
