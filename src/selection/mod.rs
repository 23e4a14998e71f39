//! Selection compiler boundary.
//!
//! Turning a GraphQL selection tree into a Cypher map projection (nested
//! relationship traversals, `@cypher` fields, per-field pagination) is the job of
//! a [`SelectionCompiler`]. The translator hands it the tree plus the variable the
//! projection is rooted at, and splices the returned fragment into its RETURN
//! clause. Parameters the compiler needs are returned alongside and merged into
//! the query's parameter bag; they must be namespaced by the index counter
//! (`1_first`, `2_name`, ...) so they can't collide with top-level arguments.
//!
//! [`FlatSelectionCompiler`] is a minimal implementation covering leaf fields and
//! relationship payload endpoints.

mod flat;

pub use flat::FlatSelectionCompiler;

use crate::operation::{SchemaType, Selection};
use crate::translator::errors::TranslateError;
use crate::translator::parameters::ParameterBag;

/// Index the first selection parameter is namespaced with
pub const FIRST_PARAM_INDEX: usize = 1;

/// Variables bound around a relationship mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipLinkage {
    /// Variable of the start node
    pub from: String,
    /// Variable of the end node
    pub to: String,
    /// Variable of the relationship, when it is still bound
    pub relationship: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct SelectionRequest<'a> {
    pub selections: &'a [Selection],
    pub variable_name: &'a str,
    pub schema_type: &'a SchemaType,
    pub param_index: usize,
    pub parent: Option<&'a RelationshipLinkage>,
}

/// Compiled projection: the text between the braces of `var { ... }`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub fragment: String,
    pub parameters: ParameterBag,
    pub next_param_index: usize,
}

pub trait SelectionCompiler: Send + Sync {
    fn compile(&self, request: &SelectionRequest<'_>) -> Result<Projection, TranslateError>;
}
