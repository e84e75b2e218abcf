//! Page view context — the input to trail construction.
//!
//! The host classifies the current request into exactly one [`PageContext`]
//! variant before calling into this crate; request routing itself ("is this
//! the front page / a search / a 404") lives outside. The context is supplied
//! wholesale and never mutated here.
//!
//! | Variant           | View                                        |
//! |-------------------|---------------------------------------------|
//! | `Home`            | Site front page                             |
//! | `PostsIndex`      | The blog posts listing page                 |
//! | `Singular`        | One content item (post, page, custom type)  |
//! | `TaxonomyArchive` | All items under one taxonomy term           |
//! | `PostTypeArchive` | All items of one custom content type        |
//! | `AuthorArchive`   | All items by one author                     |
//! | `DateArchive`     | All items in a year/month/day               |
//! | `Search`          | Search results                              |
//! | `NotFound`        | 404                                         |

use crate::utils::date::ArchiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Key of the default (non-hierarchical) content type.
pub const DEFAULT_TYPE: &str = "post";

/// Key of the built-in hierarchical page type.
pub const PAGE_TYPE: &str = "page";

// ============================================================================
// Page Context
// ============================================================================

/// Describes what kind of page is being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContext {
    /// Site front page. The trail is the Home crumb alone.
    Home,

    /// Blog posts listing page (when it is not the front page).
    PostsIndex,

    /// A single content item.
    Singular(SingularContext),

    /// Archive of a taxonomy term.
    TaxonomyArchive { term: TermRef },

    /// Archive of a custom content type.
    PostTypeArchive { label: String },

    /// Archive of one author's items.
    AuthorArchive { display_name: String },

    /// Date-bounded archive with a pre-formatted label.
    ///
    /// [`DateGranularity::label`] produces the conventional English label from
    /// an [`ArchiveDate`]; hosts with their own locale machinery can supply
    /// any label directly.
    DateArchive {
        granularity: DateGranularity,
        label: String,
    },

    /// Search results page.
    Search { query: String },

    /// 404 page.
    NotFound,
}

impl PageContext {
    /// Build a `DateArchive` context from an ISO-ish date string
    /// ("YYYY", "YYYY-MM" or "YYYY-MM-DD").
    ///
    /// Returns `None` when the date does not parse.
    pub fn date_archive(granularity: DateGranularity, date: &str) -> Option<Self> {
        let date = ArchiveDate::parse(date)?;
        Some(Self::DateArchive {
            granularity,
            label: granularity.label(date),
        })
    }
}

// ============================================================================
// Singular Context
// ============================================================================

/// Context for a single content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingularContext {
    /// The item's content type.
    pub post_type: PostTypeInfo,

    /// Content id, used for the page-parent walk through the hierarchy
    /// resolver.
    pub id: u64,

    /// Immediate parent id; 0 marks a root item with no parent chain.
    pub parent: u64,

    /// Hierarchical-classification references assigned to the item, in the
    /// host's stable enumeration order. The builder uses the first entry.
    pub terms: Vec<TermRef>,

    /// Item title — the final crumb.
    pub title: String,

    /// Canonical URL of the item. Carried for hosts; the final crumb is never
    /// linked, so this is not rendered.
    pub permalink: String,
}

/// A content type as the host registered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTypeInfo {
    /// Type key, e.g. `"post"`, `"page"`, `"product"`.
    pub key: String,

    /// Whether items of this type form a parent/child hierarchy.
    pub hierarchical: bool,

    /// Archive listing for this type, when it declares one.
    pub archive: Option<ArchiveInfo>,
}

impl PostTypeInfo {
    /// The default content type.
    pub fn post() -> Self {
        Self {
            key: DEFAULT_TYPE.into(),
            hierarchical: false,
            archive: None,
        }
    }

    /// The built-in hierarchical page type.
    pub fn page() -> Self {
        Self {
            key: PAGE_TYPE.into(),
            hierarchical: true,
            archive: None,
        }
    }

    /// True for the two built-in types, which never get an archive crumb.
    pub fn is_builtin(&self) -> bool {
        matches!(self.key.as_str(), DEFAULT_TYPE | PAGE_TYPE)
    }
}

/// Archive listing metadata for a content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveInfo {
    /// Display label of the archive.
    pub label: String,

    /// Archive URL, when resolvable.
    pub link: Option<String>,
}

/// Reference to a taxonomy term: id plus the taxonomy it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRef {
    pub id: u64,
    pub taxonomy: String,
}

// ============================================================================
// Date Granularity
// ============================================================================

/// Granularity of a date archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateGranularity {
    Year,
    Month,
    Day,
}

impl DateGranularity {
    /// Format the conventional English archive label for `date`.
    pub fn label(self, date: ArchiveDate) -> String {
        match self {
            Self::Year => format!("{}", date.year),
            Self::Month => format!("{} {}", date.month_name(), date.year),
            Self::Day => format!("{} {}, {}", date.month_name(), date.day, date.year),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
