//! Outer ORDER BY / SKIP / LIMIT.
//!
//! Both are rendered once per operation and only ever appended to the outermost
//! projecting RETURN; nested projections paginate themselves.

use super::parameters::{FIRST, OFFSET};
use crate::operation::{OrderBy, ResolvedOperation};
use crate::utils::identifiers::{safe_property, safe_var};

/// ` ORDER BY var.a ASC, var.b DESC`, or an empty string
pub fn order_by_clause(variable: &str, sorts: &[OrderBy]) -> String {
    if sorts.is_empty() {
        return String::new();
    }
    let variable = safe_var(variable);
    let keys: Vec<String> = sorts
        .iter()
        .map(|sort| {
            format!(
                "{}.{} {}",
                variable,
                safe_property(&sort.field),
                sort.direction.as_cypher()
            )
        })
        .collect();
    format!(" ORDER BY {}", keys.join(", "))
}

/// `SKIP $offset LIMIT $first` for whichever of the two was supplied
pub fn skip_limit_clause(op: &ResolvedOperation) -> String {
    let mut parts = Vec::with_capacity(2);
    if op.offset.is_some() {
        parts.push(format!("SKIP ${}", OFFSET));
    }
    if op.first.is_some() {
        parts.push(format!("LIMIT ${}", FIRST));
    }
    parts.join(" ")
}
