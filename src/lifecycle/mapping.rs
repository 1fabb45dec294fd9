//! Product mapping: turns human-entered product names into endoflife.date slugs.

use std::fmt;

/// A product identifier in the API's path format (e.g. `apple-watch`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductSlug(String);

impl ProductSlug {
    /// Borrow the slug text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map a raw product name to its API slug.
///
/// Lowercases the name and replaces every space with a hyphen. Nothing else
/// is touched, so names already in slug form pass through unchanged and the
/// mapping is idempotent.
///
/// ```
/// use eol_lookup::lifecycle::map_product;
///
/// assert_eq!(map_product("Apple Watch").as_str(), "apple-watch");
/// assert_eq!(map_product("apple-watch").as_str(), "apple-watch");
/// ```
#[must_use]
pub fn map_product(raw: &str) -> ProductSlug {
    ProductSlug(raw.to_lowercase().replace(' ', "-"))
}
