//! `[base]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in trail.toml - site-level settings.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://myblog.com/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct BaseConfig {
    /// Site root URL the leading Home crumb links to.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: String,
}
