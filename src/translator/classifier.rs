//! Operation classification.
//!
//! A custom statement directive wins; otherwise query fields are plain node
//! queries and mutation fields are classified by the first camel-case segment
//! of their name.

use std::fmt;

use super::errors::TranslateError;
use crate::operation::{OperationRoot, ResolvedOperation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    CustomQuery,
    NodeQuery,
    CustomMutation,
    NodeCreate,
    NodeUpdate,
    NodeDelete,
    RelationshipCreate,
    RelationshipDelete,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::CustomQuery => "custom query",
            Kind::NodeQuery => "node query",
            Kind::CustomMutation => "custom mutation",
            Kind::NodeCreate => "node create",
            Kind::NodeUpdate => "node update",
            Kind::NodeDelete => "node delete",
            Kind::RelationshipCreate => "relationship create",
            Kind::RelationshipDelete => "relationship delete",
        };
        f.write_str(name)
    }
}

/// Classify `op`; `cypher_directive` is the custom statement directive name
pub fn classify(op: &ResolvedOperation, cypher_directive: &str) -> Result<Kind, TranslateError> {
    let custom = op.directive(cypher_directive).is_some();

    let kind = match op.root {
        OperationRoot::Query if custom => Kind::CustomQuery,
        OperationRoot::Query => Kind::NodeQuery,
        OperationRoot::Mutation if custom => Kind::CustomMutation,
        OperationRoot::Mutation => {
            let prefix = first_segment(&op.field_name).to_ascii_lowercase();
            match prefix.as_str() {
                "create" => Kind::NodeCreate,
                "update" => Kind::NodeUpdate,
                "delete" => Kind::NodeDelete,
                "add" => Kind::RelationshipCreate,
                "remove" => Kind::RelationshipDelete,
                _ => {
                    return Err(TranslateError::UnsupportedMutationKind {
                        field_name: op.field_name.clone(),
                    })
                }
            }
        }
    };

    log::debug!("Classified '{}' as {}", op.field_name, kind);
    Ok(kind)
}

/// Leading character plus everything up to the next uppercase letter:
/// `CreatePerson` -> `Create`, `addMovieActors` -> `add`
fn first_segment(field_name: &str) -> &str {
    let mut chars = field_name.char_indices();
    if chars.next().is_none() {
        return field_name;
    }
    match chars.find(|(_, c)| c.is_uppercase()) {
        Some((idx, _)) => &field_name[..idx],
        None => field_name,
    }
}
