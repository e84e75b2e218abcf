//! Trail rendering.
//!
//! Serializes a crumb list into an HTML fragment annotated with schema.org
//! BreadcrumbList/ListItem structured data:
//!
//! ```html
//! <nav class="breadcrumbs" aria-label="breadcrumb" style="--breadcrumb-separator: '/';">
//!   <ol class="breadcrumbs-list" itemscope itemtype="https://schema.org/BreadcrumbList">
//!     <li itemprop="itemListElement" itemscope itemtype="https://schema.org/ListItem">
//!       <a itemprop="item" href="/"><span itemprop="name">Home</span></a>
//!       <meta itemprop="position" content="1" />
//!     </li>
//!     ...
//!   </ol>
//! </nav>
//! ```
//!
//! (Emitted without the indentation above.) This module is the single trust
//! boundary for output: every title, URL, tag name, class name and separator
//! glyph is escaped here regardless of where it came from.

use crate::{builder::Crumb, config::TrailConfig, utils::escape::{escape_attr, escape_html, escape_url}};
use std::fmt::Write;

// ============================================================================
// Constants
// ============================================================================

/// Structured-data type of the list element
const SCHEMA_LIST: &str = "https://schema.org/BreadcrumbList";

/// Structured-data type of each list item
const SCHEMA_ITEM: &str = "https://schema.org/ListItem";

// ============================================================================
// Public API
// ============================================================================

/// Render `crumbs` into the annotated markup fragment.
///
/// An empty trail renders as the empty string, with no container tags.
pub fn render_trail(crumbs: &[Crumb], config: &TrailConfig) -> String {
    if crumbs.is_empty() {
        return String::new();
    }

    let markup = &config.markup;
    let container_tag = escape_attr(&markup.container_tag);
    let list_tag = escape_attr(&markup.list_tag);
    let item_tag = escape_attr(&markup.item_tag);

    let mut html = String::with_capacity(256 + crumbs.len() * 128);

    // Container with the separator CSS hook and accessibility label.
    write!(
        html,
        "<{container_tag} class=\"{}\" aria-label=\"breadcrumb\" style=\"--breadcrumb-separator: '{}';\">",
        escape_attr(&markup.container_class),
        escape_attr(&markup.separator),
    )
    .ok();

    // List with schema.org markup.
    write!(
        html,
        "<{list_tag} class=\"{}\" itemscope itemtype=\"{SCHEMA_LIST}\">",
        escape_attr(&markup.list_class),
    )
    .ok();

    let last = crumbs.len() - 1;
    for (i, crumb) in crumbs.iter().enumerate() {
        let position = i + 1;
        let is_last = i == last;

        write!(
            html,
            "<{item_tag} itemprop=\"itemListElement\" itemscope itemtype=\"{SCHEMA_ITEM}\"",
        )
        .ok();

        // The final crumb is the current page.
        if is_last {
            html.push_str(" aria-current=\"page\"");
        }
        html.push('>');

        // The last item renders as plain text even when a link is known.
        match &crumb.link {
            Some(link) if !is_last && !link.is_empty() => {
                write!(
                    html,
                    "<a itemprop=\"item\" href=\"{}\"><span itemprop=\"name\">{}</span></a>",
                    escape_url(link),
                    escape_html(&crumb.title),
                )
                .ok();
            }
            _ => {
                write!(
                    html,
                    "<span itemprop=\"name\">{}</span>",
                    escape_html(&crumb.title),
                )
                .ok();
            }
        }

        write!(html, "<meta itemprop=\"position\" content=\"{position}\" />").ok();
        write!(html, "</{item_tag}>").ok();
    }

    write!(html, "</{list_tag}>").ok();
    write!(html, "</{container_tag}>").ok();

    html
}

// ============================================================================
// Tests
// ============================================================================
