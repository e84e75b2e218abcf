//! `[markup]` section configuration.
//!
//! Element tags, class names and the separator glyph used by the renderer.
//! These are caller-controlled strings reused as markup; the renderer
//! attribute-escapes every one of them at emit time.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[markup]` section in trail.toml - rendering settings.
///
/// # Example
/// ```toml
/// [markup]
/// container_tag = "nav"
/// container_class = "site-breadcrumbs"
/// list_tag = "ol"
/// list_class = "site-breadcrumbs-list"
/// item_tag = "li"
/// separator = "→"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct MarkupConfig {
    /// Tag of the outer container element.
    #[serde(default = "defaults::markup::container_tag")]
    #[educe(Default = defaults::markup::container_tag())]
    pub container_tag: String,

    /// Class of the outer container element.
    #[serde(default = "defaults::markup::container_class")]
    #[educe(Default = defaults::markup::container_class())]
    pub container_class: String,

    /// Tag of the list element.
    #[serde(default = "defaults::markup::list_tag")]
    #[educe(Default = defaults::markup::list_tag())]
    pub list_tag: String,

    /// Class of the list element.
    #[serde(default = "defaults::markup::list_class")]
    #[educe(Default = defaults::markup::list_class())]
    pub list_class: String,

    /// Tag of each list item element.
    #[serde(default = "defaults::markup::item_tag")]
    #[educe(Default = defaults::markup::item_tag())]
    pub item_tag: String,

    /// Separator glyph, exposed as a CSS custom property hook.
    #[serde(default = "defaults::markup::separator")]
    #[educe(Default = defaults::markup::separator())]
    pub separator: String,
}
