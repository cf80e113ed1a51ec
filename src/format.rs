//! Bullet line formatting.

/// Formats a markdown bullet linking to `url`.
///
/// Produces `  * [<title> [<site>]](<url>)`. Nothing is escaped: titles
/// containing `]` or URLs containing `)` are written as they are.
pub fn format_bullet(title: &str, site: &str, url: &str) -> String {
    format!("  * [{} [{}]]({})", title, site, url)
}
