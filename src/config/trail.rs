//! `[trail]` section configuration.
//!
//! Titles for the crumbs the builder synthesizes itself (as opposed to titles
//! resolved from content).

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[trail]` section in trail.toml - crumb title settings.
///
/// # Example
/// ```toml
/// [trail]
/// home_title = "Start"
/// posts_title = "Journal"
/// not_found_title = "Page not found"
/// search_prefix = "You searched for:"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct TrailTitles {
    /// Title of the leading Home crumb.
    #[serde(default = "defaults::trail::home_title")]
    #[educe(Default = defaults::trail::home_title())]
    pub home_title: String,

    /// Title of the posts listing page crumb.
    #[serde(default = "defaults::trail::posts_title")]
    #[educe(Default = defaults::trail::posts_title())]
    pub posts_title: String,

    /// Title of the 404 crumb.
    #[serde(default = "defaults::trail::not_found_title")]
    #[educe(Default = defaults::trail::not_found_title())]
    pub not_found_title: String,

    /// Prefix before the quoted query on search result pages.
    #[serde(default = "defaults::trail::search_prefix")]
    #[educe(Default = defaults::trail::search_prefix())]
    pub search_prefix: String,
}
