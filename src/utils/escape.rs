//! Output encoding primitives.
//!
//! Everything the renderer emits passes through one of these functions:
//! titles through [`escape_html`], tag/class/separator settings through
//! [`escape_attr`], and link targets through [`escape_url`]. The renderer is
//! the single trust boundary, so these are applied unconditionally regardless
//! of where a string came from.

// ============================================================================
// HTML Escaping
// ============================================================================

/// Escape special characters for an HTML text node.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a string for use inside a double-quoted HTML attribute value.
///
/// Also used for element tag names and class names, which are caller-controlled
/// settings reused as markup.
pub fn escape_attr(s: &str) -> String {
    escape_html(s)
}

// ============================================================================
// URL Escaping
// ============================================================================

/// Characters allowed through URL sanitization unchanged (RFC 3986 reserved +
/// unreserved, plus `%` so pre-encoded URLs survive a second pass).
const URL_ALLOWED: &str = "-._~:/?#[]@!$&'()*+,;=%";

/// Sanitize a URL and escape it for embedding in an `href` attribute.
///
/// Characters outside the RFC 3986 set (spaces, quotes, angle brackets,
/// non-ASCII) are percent-encoded, then the result is attribute-escaped so
/// query-string ampersands become `&amp;` and the attribute stays well-formed.
pub fn escape_url(url: &str) -> String {
    let mut sanitized = String::with_capacity(url.len());
    let mut buf = [0u8; 4];

    for c in url.chars() {
        if c.is_ascii_alphanumeric() || URL_ALLOWED.contains(c) {
            sanitized.push(c);
        } else {
            sanitized.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }

    escape_attr(&sanitized)
}

// ============================================================================
// Tests
// ============================================================================
