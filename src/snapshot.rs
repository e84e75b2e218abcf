//! In-memory site snapshot — the reference host.
//!
//! Classifying a live request into a [`PageContext`] is the host's job, not
//! this crate's. The snapshot is the in-tree host: a JSON description of a
//! site (registered content types, taxonomy terms, hierarchical pages) plus a
//! `view` record naming what is being looked at. It backs both resolver
//! traits and converts the view into a fully-populated context, which is all
//! the CLI and the integration tests need.
//!
//! # Example
//!
//! ```json
//! {
//!   "post_types": [
//!     { "key": "product", "archive": { "label": "Products", "link": "/products/" } }
//!   ],
//!   "terms": [
//!     { "id": 1, "name": "Clothing", "taxonomy": "category", "link": "/category/clothing/" },
//!     { "id": 2, "name": "Shoes", "parent": 1, "taxonomy": "category" }
//!   ],
//!   "pages": [
//!     { "id": 10, "title": "About Us", "permalink": "/about-us/", "post_type": "page" }
//!   ],
//!   "view": { "kind": "taxonomy_archive", "term": 2, "taxonomy": "category" }
//! }
//! ```

use crate::{
    context::{ArchiveInfo, DateGranularity, PageContext, PostTypeInfo, SingularContext, TermRef},
    resolve::{HierarchyResolver, Resolvers, TaxonomyResolver, TaxonomyTerm},
    utils::date::ArchiveDate,
};
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::{fs, path::Path};

// ============================================================================
// Records
// ============================================================================

/// A registered content type.
#[derive(Debug, Clone, Deserialize)]
pub struct PostTypeRecord {
    pub key: String,

    #[serde(default)]
    pub hierarchical: bool,

    #[serde(default)]
    pub archive: Option<ArchiveRecord>,
}

/// Archive listing declared by a content type.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveRecord {
    pub label: String,

    #[serde(default)]
    pub link: Option<String>,
}

/// A taxonomy term plus its canonical archive link.
#[derive(Debug, Clone, Deserialize)]
pub struct TermRecord {
    pub id: u64,
    pub name: String,

    /// Parent term id; 0 = root.
    #[serde(default)]
    pub parent: u64,

    pub taxonomy: String,

    #[serde(default)]
    pub link: Option<String>,
}

/// A content item.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRecord {
    pub id: u64,
    pub title: String,

    /// Parent item id; 0 = root.
    #[serde(default)]
    pub parent: u64,

    pub permalink: String,

    /// Content type key; defaults to the built-in page type.
    #[serde(default = "default_post_type")]
    pub post_type: String,

    /// Assigned classification refs, in stable order.
    #[serde(default)]
    pub terms: Vec<TermRef>,
}

fn default_post_type() -> String {
    crate::context::PAGE_TYPE.into()
}

// ============================================================================
// View
// ============================================================================

/// What the snapshot is looking at, referencing records by id.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewSpec {
    Home,
    PostsIndex,
    Singular {
        id: u64,
    },
    TaxonomyArchive {
        term: u64,
        taxonomy: String,
    },
    PostTypeArchive {
        post_type: String,
    },
    AuthorArchive {
        display_name: String,
    },
    DateArchive {
        granularity: DateGranularity,
        date: String,
    },
    Search {
        query: String,
    },
    NotFound,
}

// ============================================================================
// Snapshot
// ============================================================================

/// One site's worth of navigable structure plus the current view.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSnapshot {
    #[serde(default)]
    pub post_types: Vec<PostTypeRecord>,

    #[serde(default)]
    pub terms: Vec<TermRecord>,

    #[serde(default)]
    pub pages: Vec<PageRecord>,

    pub view: ViewSpec,
}

impl SiteSnapshot {
    /// Parse a snapshot from a JSON string
    pub fn from_str(content: &str) -> Result<Self> {
        let snapshot: SiteSnapshot =
            serde_json::from_str(content).context("Snapshot parsing error")?;
        Ok(snapshot)
    }

    /// Load a snapshot from a file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot `{}`", path.display()))?;
        Self::from_str(&content)
    }

    /// Both resolver traits, backed by this snapshot.
    pub fn resolvers(&self) -> Resolvers<'_> {
        Resolvers::new(self, self)
    }

    /// Convert the snapshot's view into a [`PageContext`].
    ///
    /// Dangling ids and malformed dates are host-side errors; the core never
    /// sees them.
    pub fn context(&self) -> Result<PageContext> {
        let context = match &self.view {
            ViewSpec::Home => PageContext::Home,

            ViewSpec::PostsIndex => PageContext::PostsIndex,

            ViewSpec::Singular { id } => {
                let page = self
                    .page(*id)
                    .ok_or_else(|| anyhow!("Unknown page id in view: {id}"))?;

                PageContext::Singular(SingularContext {
                    post_type: self.post_type_info(&page.post_type),
                    id: page.id,
                    parent: page.parent,
                    terms: page.terms.clone(),
                    title: page.title.clone(),
                    permalink: page.permalink.clone(),
                })
            }

            ViewSpec::TaxonomyArchive { term, taxonomy } => PageContext::TaxonomyArchive {
                term: TermRef {
                    id: *term,
                    taxonomy: taxonomy.clone(),
                },
            },

            ViewSpec::PostTypeArchive { post_type } => {
                let info = self.post_type_info(post_type);
                let label = info
                    .archive
                    .map(|archive| archive.label)
                    .unwrap_or_else(|| post_type.clone());
                PageContext::PostTypeArchive { label }
            }

            ViewSpec::AuthorArchive { display_name } => PageContext::AuthorArchive {
                display_name: display_name.clone(),
            },

            ViewSpec::DateArchive { granularity, date } => {
                let date = ArchiveDate::parse(date)
                    .ok_or_else(|| anyhow!("Invalid archive date: `{date}`"))?;
                PageContext::DateArchive {
                    granularity: *granularity,
                    label: granularity.label(date),
                }
            }

            ViewSpec::Search { query } => PageContext::Search {
                query: query.clone(),
            },

            ViewSpec::NotFound => PageContext::NotFound,
        };

        Ok(context)
    }

    fn page(&self, id: u64) -> Option<&PageRecord> {
        self.pages.iter().find(|p| p.id == id)
    }

    fn term_record(&self, id: u64, taxonomy: &str) -> Option<&TermRecord> {
        self.terms
            .iter()
            .find(|t| t.id == id && t.taxonomy == taxonomy)
    }

    /// Registered type info for `key`, or an archiveless non-hierarchical
    /// stand-in for unregistered keys (matching the page type for `"page"`).
    fn post_type_info(&self, key: &str) -> PostTypeInfo {
        if let Some(record) = self.post_types.iter().find(|t| t.key == key) {
            return PostTypeInfo {
                key: record.key.clone(),
                hierarchical: record.hierarchical,
                archive: record.archive.as_ref().map(|archive| ArchiveInfo {
                    label: archive.label.clone(),
                    link: archive.link.clone(),
                }),
            };
        }

        match key {
            crate::context::PAGE_TYPE => PostTypeInfo::page(),
            crate::context::DEFAULT_TYPE => PostTypeInfo::post(),
            _ => PostTypeInfo {
                key: key.into(),
                hierarchical: false,
                archive: None,
            },
        }
    }
}

// ============================================================================
// Resolver Implementations
// ============================================================================

/// Upper bound on ancestor walks. Guards against parent cycles in malformed
/// snapshots without tracking a visited set.
const MAX_DEPTH: usize = 64;

impl TaxonomyResolver for SiteSnapshot {
    fn term(&self, id: u64, taxonomy: &str) -> Option<TaxonomyTerm> {
        self.term_record(id, taxonomy).map(|record| TaxonomyTerm {
            id: record.id,
            name: record.name.clone(),
            parent: record.parent,
            taxonomy: record.taxonomy.clone(),
        })
    }

    fn ancestor_ids(&self, id: u64, taxonomy: &str) -> Vec<u64> {
        let mut out = Vec::new();
        let mut cursor = self
            .term_record(id, taxonomy)
            .map(|t| t.parent)
            .unwrap_or(0);

        while cursor != 0 && out.len() < MAX_DEPTH {
            out.push(cursor);
            cursor = self
                .term_record(cursor, taxonomy)
                .map(|t| t.parent)
                .unwrap_or(0);
        }
        out
    }

    fn term_link(&self, term: &TaxonomyTerm) -> Option<String> {
        self.term_record(term.id, &term.taxonomy)
            .and_then(|record| record.link.clone())
    }
}

impl HierarchyResolver for SiteSnapshot {
    fn ancestor_ids(&self, id: u64) -> Vec<u64> {
        let mut out = Vec::new();
        let mut cursor = self.page(id).map(|p| p.parent).unwrap_or(0);

        while cursor != 0 && out.len() < MAX_DEPTH {
            out.push(cursor);
            cursor = self.page(cursor).map(|p| p.parent).unwrap_or(0);
        }
        out
    }

    fn title(&self, id: u64) -> Option<String> {
        self.page(id).map(|p| p.title.clone())
    }

    fn permalink(&self, id: u64) -> Option<String> {
        self.page(id).map(|p| p.permalink.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
