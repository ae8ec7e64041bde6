/*!

Small formatting helpers shared by the term, operation, and rewrite-rule `Display` implementations.

*/

use std::fmt::Display;

/// Joins the string representations of `items` with `separator`, the way `Term`'s argument lists and
/// `RewriteRule`'s condition lists are rendered.
pub fn join_display<T: Display>(items: impl IntoIterator<Item = T>, separator: &str) -> String {
  items
    .into_iter()
    .map(|item| item.to_string())
    .collect::<Vec<_>>()
    .join(separator)
}
