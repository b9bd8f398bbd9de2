use proc_macro::TokenStream;

mod page;

/// Register an async page function in the link-time page table.
///
/// The attribute argument is the raw page path, written the way a glob
/// table would list it. The function must be async, take no arguments and
/// return the page module type.
///
/// ```rust,ignore
/// #[viterouter::page("./src/pages/home/index.tsx")]
/// async fn home() -> Page {
///     Page::new("home")
/// }
///
/// let router = ViteRouter::<Page>::from_inventory();
/// ```
#[proc_macro_attribute]
pub fn page(attr: TokenStream, item: TokenStream) -> TokenStream {
    page::page_impl(attr, item)
}
