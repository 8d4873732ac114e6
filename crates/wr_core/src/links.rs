//! Canonical article URLs.

/// Base for canonical article links, following the site convention of
/// underscores for spaces in the page path.
pub const ARTICLE_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Derive the canonical external URL for an article title.
///
/// This is the only place the link format lives; the share action and every
/// "read on Wikipedia" link go through it.
pub fn article_url(title: &str) -> String {
    format!("{}{}", ARTICLE_BASE, urlencoding::encode(&title.replace(' ', "_")))
}
