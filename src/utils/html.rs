// src/utils/html.rs

use ammonia;

/// Escape user-provided text for interpolation into page markup.
///
/// `ammonia::clean_text` entity-encodes everything that could terminate a
/// text node or a quoted attribute value, so usernames, titles, and URLs
/// entered through the forms render literally instead of as markup.
///
/// This serves as the fail-safe against Stored XSS for everything the store
/// feeds back into rendered pages.
pub fn clean_text(input: &str) -> String {
    ammonia::clean_text(input)
}
