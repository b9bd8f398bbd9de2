//! Canonical key parsing.
//!
//! Raw glob paths look like `./src/pages/user/[id]/index.tsx`. The canonical
//! key is built segment by segment:
//!
//! 1. drop everything up to and including the last `pages` segment,
//! 2. drop empty and `.` segments (double slashes, `./` prefixes),
//! 3. strip a known extension from the final segment,
//! 4. drop route-parameter segments (`[id]`, `[...slug]`, `:id`).
//!
//! `./src/pages/user/[id]/index.tsx` becomes `user/index`.

use phf::phf_set;

/// Directory that marks the start of the logical page path.
pub const PAGES_DIR: &str = "pages";

/// Suffix appended when resolving a folder reference.
pub const INDEX: &str = "index";

static PAGE_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "js",
    "jsx",
    "ts",
    "tsx",
};

/// Compute the canonical registry key for a raw glob path.
pub fn canonical_key(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').collect();
    let start = segments
        .iter()
        .rposition(|segment| *segment == PAGES_DIR)
        .map_or(0, |pos| pos + 1);

    let mut logical: Vec<&str> = segments[start..]
        .iter()
        .copied()
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    if let Some(last) = logical.last_mut() {
        *last = strip_extension(last);
    }
    logical.retain(|segment| !is_param_segment(segment));
    logical.join("/")
}

/// Strip a leading `./` from a component reference.
pub fn normalize_reference(reference: &str) -> &str {
    reference.strip_prefix("./").unwrap_or(reference)
}

/// Strip a known page extension, leaving unknown ones alone.
fn strip_extension(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && PAGE_EXTENSIONS.contains(ext) => stem,
        _ => segment,
    }
}

fn is_param_segment(segment: &str) -> bool {
    segment.starts_with(':') || (segment.starts_with('[') && segment.ends_with(']'))
}
