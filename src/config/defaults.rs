//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> String {
        "/".into()
    }
}

// ============================================================================
// [trail] Section Defaults
// ============================================================================

pub mod trail {
    pub fn home_title() -> String {
        "Home".into()
    }

    pub fn posts_title() -> String {
        "Blog".into()
    }

    pub fn not_found_title() -> String {
        "404 Not Found".into()
    }

    pub fn search_prefix() -> String {
        "Search results for:".into()
    }
}

// ============================================================================
// [markup] Section Defaults
// ============================================================================

pub mod markup {
    pub fn container_tag() -> String {
        "nav".into()
    }

    pub fn container_class() -> String {
        "breadcrumbs".into()
    }

    pub fn list_tag() -> String {
        "ol".into()
    }

    pub fn list_class() -> String {
        "breadcrumbs-list".into()
    }

    pub fn item_tag() -> String {
        "li".into()
    }

    pub fn separator() -> String {
        "/".into()
    }
}
