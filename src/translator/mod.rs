//! GraphQL-to-Cypher translation.
//!
//! [`Translator::translate`] classifies a [`ResolvedOperation`] into a [`Kind`] and
//! hands it to the matching synthesizer:
//!
//! | Kind                 | module         |
//! |----------------------|----------------|
//! | `NodeQuery`          | `query`        |
//! | `CustomQuery`        | `query`        |
//! | `CustomMutation`     | `mutation`     |
//! | `NodeCreate`         | `mutation`     |
//! | `NodeUpdate`         | `mutation`     |
//! | `NodeDelete`         | `mutation`     |
//! | `RelationshipCreate` | `relationship` |
//! | `RelationshipDelete` | `relationship` |
//!
//! Every arm is a pure function of the operation and the translator's
//! collaborators. Translation either yields a complete [`Query`] or fails with a
//! [`TranslateError`]; nothing partial is returned.

pub mod classifier;
pub mod clauses;
pub mod errors;
pub mod mutation;
pub mod mutation_meta;
pub mod parameters;
pub mod predicates;
pub mod query;
pub mod relationship;
pub mod temporal;

pub use classifier::{classify, Kind};
pub use errors::TranslateError;
pub use mutation_meta::MutationMeta;
pub use parameters::{FilterParams, ParameterBag};

use serde::Serialize;
use serde_json::Value;

use crate::config::TranslatorConfig;
use crate::operation::ResolvedOperation;
use crate::selection::{
    Projection, RelationshipLinkage, SelectionCompiler, SelectionRequest, FIRST_PARAM_INDEX,
};
use crate::utils::id_generation::IdGenerator;

/// Generated statement and the parameters to execute it with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    text: String,
    parameters: ParameterBag,
}

impl Query {
    pub(crate) fn new(text: String, parameters: ParameterBag) -> Self {
        Self { text, parameters }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &ParameterBag {
        &self.parameters
    }

    pub fn into_parts(self) -> (String, ParameterBag) {
        (self.text, self.parameters)
    }
}

pub struct Translator<'a> {
    config: TranslatorConfig,
    selection_compiler: &'a dyn SelectionCompiler,
    id_generator: &'a dyn IdGenerator,
}

impl<'a> Translator<'a> {
    pub fn new(selection_compiler: &'a dyn SelectionCompiler, id_generator: &'a dyn IdGenerator) -> Self {
        Self {
            config: TranslatorConfig::default(),
            selection_compiler,
            id_generator,
        }
    }

    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn translate(&self, op: &ResolvedOperation) -> Result<Query, TranslateError> {
        let kind = classify(op, &self.config.cypher_directive)?;
        self.translate_kind(kind, op)
    }

    /// Run the synthesizer for an already classified operation
    pub fn translate_kind(&self, kind: Kind, op: &ResolvedOperation) -> Result<Query, TranslateError> {
        let query = match kind {
            Kind::NodeQuery => query::node_query(self, op),
            Kind::CustomQuery => query::custom_query(self, op),
            Kind::CustomMutation => mutation::custom_mutation(self, op),
            Kind::NodeCreate => mutation::node_create(self, op),
            Kind::NodeUpdate => mutation::node_update(self, op),
            Kind::NodeDelete => mutation::node_delete(self, op),
            Kind::RelationshipCreate => relationship::relationship_create(self, op),
            Kind::RelationshipDelete => relationship::relationship_delete(self, op),
        }?;

        log::debug!("Generated Cypher for {} '{}': {}", kind, op.field_name, query.text);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Parameters: {}", Value::Object(query.parameters.clone()));
        }
        Ok(query)
    }

    /// Compile the operation's selection rooted at `variable`
    pub(crate) fn project(
        &self,
        op: &ResolvedOperation,
        variable: &str,
        parent: Option<&RelationshipLinkage>,
    ) -> Result<Projection, TranslateError> {
        self.selection_compiler.compile(&SelectionRequest {
            selections: &op.selections,
            variable_name: variable,
            schema_type: &op.schema_type,
            param_index: FIRST_PARAM_INDEX,
            parent,
        })
    }

    pub(crate) fn id_generator(&self) -> &dyn IdGenerator {
        self.id_generator
    }
}
