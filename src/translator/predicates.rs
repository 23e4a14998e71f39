//! WHERE clause assembly.
//!
//! Predicates are collected into fixed buckets and always rendered in the same
//! order, whatever order they were added in:
//!
//! 1. internal id equality
//! 2. `IS NULL` checks for arguments supplied as null
//! 3. temporal component / formatted checks
//! 4. list membership for list-valued arguments
//!
//! An empty builder renders no WHERE clause at all.

use serde_json::{Map, Value};

use super::parameters::FilterParams;
use super::temporal::{temporal_predicate_clauses, TemporalArgument};
use crate::utils::identifiers::{parameter_ref, safe_property, safe_var};

/// Parameter carrying the internal node id filter
pub const INTERNAL_ID_PARAM: &str = "_id";

/// One boolean fragment and the parameters it reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateClause {
    pub text: String,
    pub parameters: Vec<String>,
}

impl PredicateClause {
    pub fn new(text: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            text: text.into(),
            parameters,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PredicateBuilder {
    variable: String,
    id: Option<PredicateClause>,
    nulls: Vec<PredicateClause>,
    temporal: Vec<PredicateClause>,
    arrays: Vec<PredicateClause>,
}

impl PredicateBuilder {
    pub fn new(variable: &str) -> Self {
        Self {
            variable: safe_var(variable),
            id: None,
            nulls: Vec::new(),
            temporal: Vec::new(),
            arrays: Vec::new(),
        }
    }

    /// All four buckets filled from the supplied arguments
    pub fn for_filter(
        variable: &str,
        has_internal_id: bool,
        filter: &FilterParams,
        temporal_args: &[TemporalArgument],
    ) -> Self {
        let mut builder = Self::new(variable);
        if has_internal_id {
            builder = builder.internal_id();
        }
        builder
            .null_fields(filter.null_params())
            .temporal(filter.non_null_params(), temporal_args, None)
            .array_membership(filter.array_params().map(|(k, _)| k.as_str()))
    }

    /// `ID(var) = $_id`
    pub fn internal_id(mut self) -> Self {
        self.id = Some(PredicateClause::new(
            format!("ID({}) = ${}", self.variable, INTERNAL_ID_PARAM),
            vec![INTERNAL_ID_PARAM.to_string()],
        ));
        self
    }

    pub fn null_fields(mut self, null_params: &Map<String, Value>) -> Self {
        for key in null_params.keys() {
            self.nulls.push(PredicateClause::new(
                format!("{}.{} IS NULL", self.variable, safe_property(key)),
                Vec::new(),
            ));
        }
        self
    }

    pub fn temporal(
        mut self,
        filters: &Map<String, Value>,
        temporal_args: &[TemporalArgument],
        parent_param: Option<&str>,
    ) -> Self {
        self.temporal.extend(temporal_predicate_clauses(
            filters,
            &self.variable,
            temporal_args,
            parent_param,
        ));
        self
    }

    pub fn array_membership<'a, I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for key in keys {
            self.arrays.push(PredicateClause::new(
                format!(
                    "{}.{} IN {}",
                    self.variable,
                    safe_property(key),
                    parameter_ref(None, key)
                ),
                vec![key.to_string()],
            ));
        }
        self
    }

    /// Clauses in precedence order, empty fragments dropped
    pub fn build(self) -> Vec<PredicateClause> {
        self.id
            .into_iter()
            .chain(self.nulls)
            .chain(self.temporal)
            .chain(self.arrays)
            .filter(|clause| !clause.is_empty())
            .collect()
    }
}

/// `a AND b AND c`, or `None` for an empty list
pub fn join_predicates(clauses: &[PredicateClause]) -> Option<String> {
    let parts: Vec<&str> = clauses
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| c.text.as_str())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" AND "))
    }
}

/// `WHERE <predicates> ` with a trailing space, or an empty string
pub fn where_clause(clauses: &[PredicateClause]) -> String {
    join_predicates(clauses)
        .map(|predicates| format!("WHERE {} ", predicates))
        .unwrap_or_default()
}
