//! Identifier quoting for Cypher text.
//!
//! Labels, relationship types, property keys and variable names are the only
//! caller-influenced strings interpolated into generated statements; every one of
//! them goes through this module first. Values are never interpolated, they are
//! always bound as parameters.
//!
//! Two strategies:
//! - **Labels, relationship types, property keys** keep their exact spelling. Plain
//!   identifiers are emitted bare, anything else is wrapped in backticks with inner
//!   backticks doubled (Cypher's escape for a quoted name).
//! - **Variables** are ours to name, so instead of quoting them every character
//!   outside `[A-Za-z0-9_]` is rewritten to `_`.
//!
//! ```
//! use graphql_cypher::utils::identifiers::{safe_label, safe_var};
//!
//! assert_eq!(safe_label("Person"), "Person");
//! assert_eq!(safe_label("Film Noir"), "`Film Noir`");
//! assert_eq!(safe_label("a`b"), "`a``b`");
//! assert_eq!(safe_var("movie-from"), "movie_from");
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLAIN_IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Whether `name` can appear in Cypher text without backticks
pub fn is_plain_identifier(name: &str) -> bool {
    PLAIN_IDENTIFIER.is_match(name)
}

/// Quote a node label or relationship type
pub fn safe_label(name: &str) -> String {
    if is_plain_identifier(name) {
        name.to_string()
    } else {
        format!("`{}`", name.replace('`', "``"))
    }
}

/// Quote a property key (`var.<key>`, `{<key>: ...}`)
pub fn safe_property(name: &str) -> String {
    safe_label(name)
}

/// Sanitize a variable name into a plain identifier
pub fn safe_var(name: &str) -> String {
    let mut sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if sanitized.is_empty() || sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        sanitized.insert(0, '_');
    }
    sanitized
}

/// Parameter reference for a (possibly namespaced) parameter: `$name` or `$ns.name`.
///
/// Parameter names come from GraphQL argument names, which are plain identifiers;
/// anything else is quoted the same way as a property key.
pub fn parameter_ref(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(ns) => format!("${}.{}", safe_property(ns), safe_property(name)),
        None => format!("${}", safe_property(name)),
    }
}
