//! Relationship-linking metadata for Add/Remove mutations.
//!
//! Relationship mutations carry a directive on their field definition naming the
//! relationship type and its two endpoint types:
//!
//! ```graphql
//! AddMovieActors(from: _PersonInput!, to: _MovieInput!): _AddMovieActorsPayload
//!   @MutationMeta(relationship: "ACTED_IN", from: "Person", to: "Movie")
//! ```

use super::errors::TranslateError;
use crate::operation::ResolvedOperation;

pub const RELATIONSHIP_ARGUMENT: &str = "relationship";
pub const FROM_ARGUMENT: &str = "from";
pub const TO_ARGUMENT: &str = "to";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationMeta {
    pub relationship_type_name: String,
    pub from_type: String,
    pub to_type: String,
}

impl MutationMeta {
    /// Read the linking directive named `directive_name` off the operation
    pub fn resolve(op: &ResolvedOperation, directive_name: &str) -> Result<Self, TranslateError> {
        let directive = op.directive(directive_name).ok_or_else(|| {
            TranslateError::missing_meta(
                &op.field_name,
                format!("required @{} directive is absent", directive_name),
            )
        })?;

        let required = |argument: &str| {
            directive
                .string_argument(argument)
                .map(str::to_string)
                .ok_or_else(|| {
                    TranslateError::missing_meta(
                        &op.field_name,
                        format!(
                            "@{} is missing its '{}' argument (relationship, from and to are required)",
                            directive_name, argument
                        ),
                    )
                })
        };

        Ok(Self {
            relationship_type_name: required(RELATIONSHIP_ARGUMENT)?,
            from_type: required(FROM_ARGUMENT)?,
            to_type: required(TO_ARGUMENT)?,
        })
    }
}
