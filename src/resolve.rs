//! Resolver interfaces the trail builder looks entities up through.
//!
//! The builder never touches storage directly: taxonomy terms and page
//! hierarchies come in through these two narrow traits (id-in, id-list-out),
//! so any store — a database, a cache, a static index — can back them.
//! Lookups are blocking, read-only, and must present a consistent snapshot
//! for the duration of a single `build()` call.
//!
//! A failed lookup is not an error: the builder degrades by omitting the
//! corresponding crumb, so every method returns `Option`/an empty list rather
//! than `Result`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Taxonomy
// ============================================================================

/// One term of a hierarchical taxonomy.
///
/// Terms form a forest keyed by `taxonomy`; `parent == 0` marks a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: u64,
    pub name: String,
    /// Parent term id; 0 = root.
    #[serde(default)]
    pub parent: u64,
    /// Key of the taxonomy this term belongs to, e.g. `"category"`.
    pub taxonomy: String,
}

impl TaxonomyTerm {
    /// True when this term has no parent.
    pub const fn is_root(&self) -> bool {
        self.parent == 0
    }
}

/// Taxonomy term lookups.
pub trait TaxonomyResolver {
    /// Look up a term by id within a taxonomy.
    fn term(&self, id: u64, taxonomy: &str) -> Option<TaxonomyTerm>;

    /// Ancestor term ids of `id`, immediate-parent-first, excluding `id`
    /// itself. Empty for roots and unknown ids.
    fn ancestor_ids(&self, id: u64, taxonomy: &str) -> Vec<u64>;

    /// Canonical archive URL for a term, when one exists.
    fn term_link(&self, term: &TaxonomyTerm) -> Option<String>;
}

// ============================================================================
// Hierarchy
// ============================================================================

/// Hierarchical content (page-parent) lookups.
pub trait HierarchyResolver {
    /// Ancestor content ids of `id`, immediate-parent-first, excluding `id`
    /// itself. Empty for roots and unknown ids.
    fn ancestor_ids(&self, id: u64) -> Vec<u64>;

    /// Title of a content item.
    fn title(&self, id: u64) -> Option<String>;

    /// Permalink of a content item.
    fn permalink(&self, id: u64) -> Option<String>;
}

// ============================================================================
// Bundle
// ============================================================================

/// The resolver pair handed to the builder.
#[derive(Clone, Copy)]
pub struct Resolvers<'a> {
    pub taxonomy: &'a dyn TaxonomyResolver,
    pub hierarchy: &'a dyn HierarchyResolver,
}

impl<'a> Resolvers<'a> {
    pub fn new(taxonomy: &'a dyn TaxonomyResolver, hierarchy: &'a dyn HierarchyResolver) -> Self {
        Self {
            taxonomy,
            hierarchy,
        }
    }
}
