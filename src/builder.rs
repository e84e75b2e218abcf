//! Trail construction.
//!
//! Turns a [`PageContext`] into the ordered crumb list, deciding which
//! ancestor nodes to surface, in what order, and with what labels and links.
//!
//! # Architecture
//!
//! ```text
//! PageContext ──► TrailBuilder::build() ──► Vec<Crumb> ──► render_trail()
//!                        │
//!                        ├── TaxonomyResolver (term chains)
//!                        └── HierarchyResolver (page-parent chains)
//! ```
//!
//! Construction is total: every context variant produces a trail, and a
//! resolver miss drops the affected crumb instead of failing the call.

use crate::{
    config::TrailConfig,
    context::{PageContext, SingularContext},
    resolve::{Resolvers, TaxonomyTerm},
};

// ============================================================================
// Crumb
// ============================================================================

/// One node of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Human-readable label. Never empty in a built trail.
    pub title: String,

    /// Link target. `None` on the final crumb and on crumbs whose canonical
    /// URL could not be resolved.
    pub link: Option<String>,
}

impl Crumb {
    pub fn new(title: impl Into<String>, link: Option<String>) -> Self {
        Self {
            title: title.into(),
            link,
        }
    }
}

// ============================================================================
// TrailBuilder
// ============================================================================

/// Builds the crumb list for one page view.
pub struct TrailBuilder<'a> {
    config: &'a TrailConfig,
    resolvers: Resolvers<'a>,
    crumbs: Vec<Crumb>,
}

impl<'a> TrailBuilder<'a> {
    pub fn new(config: &'a TrailConfig, resolvers: Resolvers<'a>) -> Self {
        Self {
            config,
            resolvers,
            crumbs: Vec::new(),
        }
    }

    /// Build the trail for `context`.
    ///
    /// The first crumb is always Home, linked to the configured site root. On
    /// the `Home` variant it is also the only crumb. Every other variant
    /// appends crumbs ending in an unlinked crumb for the current view.
    pub fn build(mut self, context: &PageContext) -> Vec<Crumb> {
        self.push(
            self.config.trail.home_title.clone(),
            Some(self.config.base.url.clone()),
        );

        match context {
            PageContext::Home => {}

            PageContext::PostsIndex => {
                self.push_text(self.config.trail.posts_title.clone());
            }

            PageContext::Singular(singular) => self.singular_crumbs(singular),

            PageContext::TaxonomyArchive { term } => {
                if let Some(term) = self.resolvers.taxonomy.term(term.id, &term.taxonomy) {
                    self.term_ancestor_crumbs(&term);
                    self.push_text(term.name);
                }
            }

            PageContext::PostTypeArchive { label } => self.push_text(label.clone()),

            PageContext::AuthorArchive { display_name } => {
                self.push_text(format!("Author: {display_name}"));
            }

            PageContext::DateArchive { label, .. } => self.push_text(label.clone()),

            PageContext::Search { query } => {
                self.push_text(format!("{} \"{query}\"", self.config.trail.search_prefix));
            }

            PageContext::NotFound => {
                self.push_text(self.config.trail.not_found_title.clone());
            }
        }

        self.crumbs
    }

    /// Crumbs for a single content item: optional type-archive crumb, the
    /// primary classification's ancestor chain, the page-parent chain, then
    /// the item itself.
    fn singular_crumbs(&mut self, singular: &SingularContext) {
        // Custom types with a declared archive get a crumb linking to it.
        if !singular.post_type.is_builtin()
            && let Some(archive) = &singular.post_type.archive
        {
            self.push(archive.label.clone(), archive.link.clone());
        }

        // First assigned classification in the host's stable order wins;
        // the rest are ignored.
        if let Some(term_ref) = singular.terms.first()
            && let Some(term) = self.resolvers.taxonomy.term(term_ref.id, &term_ref.taxonomy)
        {
            self.term_ancestor_crumbs(&term);
        }

        // Page-parent chain for hierarchical types.
        if singular.post_type.hierarchical && singular.parent != 0 {
            let mut ancestors = self.resolvers.hierarchy.ancestor_ids(singular.id);
            ancestors.reverse();
            for id in ancestors {
                if let Some(title) = self.resolvers.hierarchy.title(id) {
                    let link = self.resolvers.hierarchy.permalink(id);
                    self.push(title, link);
                }
            }
        }

        // The current item is always last and never linked.
        self.push_text(singular.title.clone());
    }

    /// Emit the ancestor chain of `term`, root-first, one linked crumb per
    /// resolvable ancestor. The term itself is not emitted.
    fn term_ancestor_crumbs(&mut self, term: &TaxonomyTerm) {
        if term.is_root() {
            return;
        }

        let mut ancestors = self.resolvers.taxonomy.ancestor_ids(term.id, &term.taxonomy);
        ancestors.reverse();

        for id in ancestors {
            if let Some(ancestor) = self.resolvers.taxonomy.term(id, &term.taxonomy) {
                let link = self.resolvers.taxonomy.term_link(&ancestor);
                self.push(ancestor.name, link);
            }
        }
    }

    /// Append a crumb, skipping empty titles.
    fn push(&mut self, title: String, link: Option<String>) {
        if title.is_empty() {
            return;
        }
        self.crumbs.push(Crumb { title, link });
    }

    /// Append an unlinked crumb.
    fn push_text(&mut self, title: String) {
        self.push(title, None);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ArchiveInfo, DateGranularity, PostTypeInfo, TermRef};
    use crate::resolve::{HierarchyResolver, TaxonomyResolver};
    use std::collections::BTreeMap;

    /// Minimal in-test resolver over hand-built forests.
    #[derive(Default)]
    struct FakeSite {
        terms: BTreeMap<u64, TaxonomyTerm>,
        pages: BTreeMap<u64, (String, String, u64)>, // id -> (title, permalink, parent)
    }

    impl FakeSite {
        fn with_term(mut self, id: u64, name: &str, parent: u64, taxonomy: &str) -> Self {
            self.terms.insert(
                id,
                TaxonomyTerm {
                    id,
                    name: name.into(),
                    parent,
                    taxonomy: taxonomy.into(),
                },
            );
            self
        }

        fn with_page(mut self, id: u64, title: &str, permalink: &str, parent: u64) -> Self {
            self.pages
                .insert(id, (title.into(), permalink.into(), parent));
            self
        }

        fn resolvers(&self) -> Resolvers<'_> {
            Resolvers::new(self, self)
        }
    }

    impl TaxonomyResolver for FakeSite {
        fn term(&self, id: u64, taxonomy: &str) -> Option<TaxonomyTerm> {
            self.terms.get(&id).filter(|t| t.taxonomy == taxonomy).cloned()
        }

        fn ancestor_ids(&self, id: u64, taxonomy: &str) -> Vec<u64> {
            let mut out = Vec::new();
            let mut cursor = self.term(id, taxonomy).map(|t| t.parent).unwrap_or(0);
            while cursor != 0 {
                out.push(cursor);
                cursor = self.term(cursor, taxonomy).map(|t| t.parent).unwrap_or(0);
            }
            out
        }

        fn term_link(&self, term: &TaxonomyTerm) -> Option<String> {
            Some(format!("/{}/{}/", term.taxonomy, term.id))
        }
    }

    impl HierarchyResolver for FakeSite {
        fn ancestor_ids(&self, id: u64) -> Vec<u64> {
            let mut out = Vec::new();
            let mut cursor = self.pages.get(&id).map(|p| p.2).unwrap_or(0);
            while cursor != 0 {
                out.push(cursor);
                cursor = self.pages.get(&cursor).map(|p| p.2).unwrap_or(0);
            }
            out
        }

        fn title(&self, id: u64) -> Option<String> {
            self.pages.get(&id).map(|p| p.0.clone())
        }

        fn permalink(&self, id: u64) -> Option<String> {
            self.pages.get(&id).map(|p| p.1.clone())
        }
    }

    fn build(site: &FakeSite, context: &PageContext) -> Vec<Crumb> {
        let config = TrailConfig::default();
        TrailBuilder::new(&config, site.resolvers()).build(context)
    }

    fn titles(crumbs: &[Crumb]) -> Vec<&str> {
        crumbs.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_home_is_a_single_crumb() {
        let site = FakeSite::default();
        let crumbs = build(&site, &PageContext::Home);

        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0], Crumb::new("Home", Some("/".into())));
    }

    #[test]
    fn test_every_other_context_leads_with_home() {
        let site = FakeSite::default();
        let contexts = [
            PageContext::PostsIndex,
            PageContext::NotFound,
            PageContext::Search {
                query: "x".into(),
            },
            PageContext::AuthorArchive {
                display_name: "Alice".into(),
            },
        ];

        for context in &contexts {
            let crumbs = build(&site, context);
            assert_eq!(crumbs[0], Crumb::new("Home", Some("/".into())));
            assert!(crumbs.len() > 1);
        }
    }

    #[test]
    fn test_posts_index_uses_configured_title() {
        let site = FakeSite::default();
        let config = TrailConfig::from_str("[trail]\nposts_title = \"Journal\"").unwrap();
        let crumbs = TrailBuilder::new(&config, site.resolvers()).build(&PageContext::PostsIndex);

        assert_eq!(titles(&crumbs), ["Home", "Journal"]);
        assert_eq!(crumbs[1].link, None);
    }

    #[test]
    fn test_singular_page_without_ancestry() {
        let site = FakeSite::default();
        let context = PageContext::Singular(SingularContext {
            post_type: PostTypeInfo::page(),
            id: 10,
            parent: 0,
            terms: vec![],
            title: "About Us".into(),
            permalink: "/about-us/".into(),
        });

        let crumbs = build(&site, &context);
        assert_eq!(titles(&crumbs), ["Home", "About Us"]);
        assert_eq!(crumbs[1].link, None);
    }

    #[test]
    fn test_singular_page_with_parent_chain_is_root_first() {
        // Services (1) -> Consulting (2) -> Audit (3, current)
        let site = FakeSite::default()
            .with_page(1, "Services", "/services/", 0)
            .with_page(2, "Consulting", "/services/consulting/", 1)
            .with_page(3, "Audit", "/services/consulting/audit/", 2);

        let context = PageContext::Singular(SingularContext {
            post_type: PostTypeInfo::page(),
            id: 3,
            parent: 2,
            terms: vec![],
            title: "Audit".into(),
            permalink: "/services/consulting/audit/".into(),
        });

        let crumbs = build(&site, &context);
        assert_eq!(titles(&crumbs), ["Home", "Services", "Consulting", "Audit"]);
        assert_eq!(crumbs[1].link.as_deref(), Some("/services/"));
        assert_eq!(crumbs[2].link.as_deref(), Some("/services/consulting/"));
        assert_eq!(crumbs[3].link, None);
    }

    #[test]
    fn test_singular_non_hierarchical_type_ignores_parent() {
        let site = FakeSite::default().with_page(1, "Orphaned Parent", "/p/", 0);

        let context = PageContext::Singular(SingularContext {
            post_type: PostTypeInfo::post(),
            id: 2,
            parent: 1,
            terms: vec![],
            title: "Hello".into(),
            permalink: "/hello/".into(),
        });

        let crumbs = build(&site, &context);
        assert_eq!(titles(&crumbs), ["Home", "Hello"]);
    }

    #[test]
    fn test_singular_post_emits_term_ancestors_only() {
        // Clothing (1, root) -> Shoes (2); post classified under Shoes.
        // The chain stops above the assigned term: Shoes itself is not a crumb.
        let site = FakeSite::default()
            .with_term(1, "Clothing", 0, "category")
            .with_term(2, "Shoes", 1, "category");

        let context = PageContext::Singular(SingularContext {
            post_type: PostTypeInfo::post(),
            id: 5,
            parent: 0,
            terms: vec![TermRef {
                id: 2,
                taxonomy: "category".into(),
            }],
            title: "Summer Sneakers".into(),
            permalink: "/summer-sneakers/".into(),
        });

        let crumbs = build(&site, &context);
        assert_eq!(titles(&crumbs), ["Home", "Clothing", "Summer Sneakers"]);
        assert_eq!(crumbs[1].link.as_deref(), Some("/category/1/"));
    }

    #[test]
    fn test_singular_post_with_root_term_has_no_term_crumbs() {
        let site = FakeSite::default().with_term(1, "News", 0, "category");

        let context = PageContext::Singular(SingularContext {
            post_type: PostTypeInfo::post(),
            id: 5,
            parent: 0,
            terms: vec![TermRef {
                id: 1,
                taxonomy: "category".into(),
            }],
            title: "Update".into(),
            permalink: "/update/".into(),
        });

        let crumbs = build(&site, &context);
        assert_eq!(titles(&crumbs), ["Home", "Update"]);
    }

    #[test]
    fn test_singular_first_term_wins() {
        let site = FakeSite::default()
            .with_term(1, "Genres", 0, "genre")
            .with_term(2, "Jazz", 1, "genre")
            .with_term(3, "Decades", 0, "era")
            .with_term(4, "Sixties", 3, "era");

        let context = PageContext::Singular(SingularContext {
            post_type: PostTypeInfo::post(),
            id: 9,
            parent: 0,
            terms: vec![
                TermRef {
                    id: 2,
                    taxonomy: "genre".into(),
                },
                TermRef {
                    id: 4,
                    taxonomy: "era".into(),
                },
            ],
            title: "A Love Supreme".into(),
            permalink: "/a-love-supreme/".into(),
        });

        let crumbs = build(&site, &context);
        assert_eq!(titles(&crumbs), ["Home", "Genres", "A Love Supreme"]);
    }

    #[test]
    fn test_custom_type_archive_crumb() {
        let site = FakeSite::default();
        let context = PageContext::Singular(SingularContext {
            post_type: PostTypeInfo {
                key: "product".into(),
                hierarchical: false,
                archive: Some(ArchiveInfo {
                    label: "Products".into(),
                    link: Some("/products/".into()),
                }),
            },
            id: 7,
            parent: 0,
            terms: vec![],
            title: "Widget".into(),
            permalink: "/products/widget/".into(),
        });

        let crumbs = build(&site, &context);
        assert_eq!(titles(&crumbs), ["Home", "Products", "Widget"]);
        assert_eq!(crumbs[1].link.as_deref(), Some("/products/"));
    }

    #[test]
    fn test_builtin_types_never_get_archive_crumbs() {
        let site = FakeSite::default();
        let context = PageContext::Singular(SingularContext {
            post_type: PostTypeInfo {
                archive: Some(ArchiveInfo {
                    label: "Posts".into(),
                    link: Some("/posts/".into()),
                }),
                ..PostTypeInfo::post()
            },
            id: 7,
            parent: 0,
            terms: vec![],
            title: "Hello".into(),
            permalink: "/hello/".into(),
        });

        let crumbs = build(&site, &context);
        assert_eq!(titles(&crumbs), ["Home", "Hello"]);
    }

    #[test]
    fn test_taxonomy_archive_chain_is_root_first() {
        // Clothing (1) -> Shoes (2) -> Sneakers (3, current archive)
        let site = FakeSite::default()
            .with_term(1, "Clothing", 0, "category")
            .with_term(2, "Shoes", 1, "category")
            .with_term(3, "Sneakers", 2, "category");

        let crumbs = build(
            &site,
            &PageContext::TaxonomyArchive {
                term: TermRef {
                    id: 3,
                    taxonomy: "category".into(),
                },
            },
        );

        assert_eq!(titles(&crumbs), ["Home", "Clothing", "Shoes", "Sneakers"]);
        assert_eq!(crumbs[1].link.as_deref(), Some("/category/1/"));
        assert_eq!(crumbs[2].link.as_deref(), Some("/category/2/"));
        assert_eq!(crumbs[3].link, None);
    }

    #[test]
    fn test_taxonomy_archive_unresolvable_term_degrades_to_home() {
        let site = FakeSite::default();
        let crumbs = build(
            &site,
            &PageContext::TaxonomyArchive {
                term: TermRef {
                    id: 42,
                    taxonomy: "category".into(),
                },
            },
        );

        assert_eq!(titles(&crumbs), ["Home"]);
    }

    #[test]
    fn test_taxonomy_archive_skips_unresolvable_ancestor() {
        // Ancestor id 1 is missing from the store; the chain emits what it can.
        let site = FakeSite::default()
            .with_term(2, "Shoes", 1, "category")
            .with_term(3, "Sneakers", 2, "category");

        let crumbs = build(
            &site,
            &PageContext::TaxonomyArchive {
                term: TermRef {
                    id: 3,
                    taxonomy: "category".into(),
                },
            },
        );

        assert_eq!(titles(&crumbs), ["Home", "Shoes", "Sneakers"]);
    }

    #[test]
    fn test_empty_titles_are_never_emitted() {
        let site = FakeSite::default().with_page(1, "", "/mystery/", 0);

        let context = PageContext::Singular(SingularContext {
            post_type: PostTypeInfo::page(),
            id: 2,
            parent: 1,
            terms: vec![],
            title: "Child".into(),
            permalink: "/mystery/child/".into(),
        });

        let crumbs = build(&site, &context);
        assert_eq!(titles(&crumbs), ["Home", "Child"]);
        assert!(crumbs.iter().all(|c| !c.title.is_empty()));
    }

    #[test]
    fn test_search_quotes_query_verbatim() {
        let site = FakeSite::default();
        let crumbs = build(
            &site,
            &PageContext::Search {
                query: "wifi router".into(),
            },
        );

        assert_eq!(
            titles(&crumbs),
            ["Home", "Search results for: \"wifi router\""]
        );
    }

    #[test]
    fn test_date_archive_emits_label() {
        let site = FakeSite::default();
        let context = PageContext::date_archive(DateGranularity::Month, "2024-03").unwrap();
        let crumbs = build(&site, &context);

        assert_eq!(titles(&crumbs), ["Home", "March 2024"]);
    }

    #[test]
    fn test_not_found_uses_configured_title() {
        let site = FakeSite::default();
        let crumbs = build(&site, &PageContext::NotFound);

        assert_eq!(titles(&crumbs), ["Home", "404 Not Found"]);
    }

    #[test]
    fn test_post_type_archive_label() {
        let site = FakeSite::default();
        let crumbs = build(
            &site,
            &PageContext::PostTypeArchive {
                label: "Products".into(),
            },
        );

        assert_eq!(titles(&crumbs), ["Home", "Products"]);
        assert_eq!(crumbs[1].link, None);
    }

    #[test]
    fn test_author_archive_prefix() {
        let site = FakeSite::default();
        let crumbs = build(
            &site,
            &PageContext::AuthorArchive {
                display_name: "Alice".into(),
            },
        );

        assert_eq!(titles(&crumbs), ["Home", "Author: Alice"]);
    }
}
