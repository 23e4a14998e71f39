//! Temporal (date/time) arguments.
//!
//! Temporal arguments arrive as component maps (`{year: 2020, month: 3}`) and/or a
//! `formatted` ISO string. Unlike scalars they can't be matched inline in a MATCH
//! pattern; they need WHERE predicates over the individual components, and on
//! writes they are wrapped in the matching Cypher constructor.

use serde_json::{Map, Value};

use super::predicates::PredicateClause;
use crate::operation::TypeRef;
use crate::utils::identifiers::{safe_property, safe_var};

/// Name of the component that carries the whole value as an ISO string
pub const FORMATTED: &str = "formatted";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    Time,
    Date,
    DateTime,
    LocalTime,
    LocalDateTime,
}

impl TemporalKind {
    /// Output type name (`_Neo4jDate`)
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "_Neo4jTime" => Some(Self::Time),
            "_Neo4jDate" => Some(Self::Date),
            "_Neo4jDateTime" => Some(Self::DateTime),
            "_Neo4jLocalTime" => Some(Self::LocalTime),
            "_Neo4jLocalDateTime" => Some(Self::LocalDateTime),
            _ => None,
        }
    }

    /// Input type name (`_Neo4jDateInput`)
    pub fn from_input_type_name(name: &str) -> Option<Self> {
        Self::from_type_name(name.strip_suffix("Input")?)
    }

    /// Cypher function constructing a value of this kind
    pub fn constructor(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::LocalTime => "localtime",
            Self::LocalDateTime => "localdatetime",
        }
    }
}

/// A declared argument (or input field) of temporal type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalArgument {
    pub name: String,
    pub kind: TemporalKind,
}

/// Pick out the temporal declarations from `(name, type)` pairs
pub fn temporal_arguments<'a, I>(declared: I) -> Vec<TemporalArgument>
where
    I: IntoIterator<Item = (&'a str, &'a TypeRef)>,
{
    declared
        .into_iter()
        .filter_map(|(name, ty)| {
            ty.temporal_kind().map(|kind| TemporalArgument {
                name: name.to_string(),
                kind,
            })
        })
        .collect()
}

/// Predicates matching `variable.<arg>` against the supplied temporal values.
///
/// A supplied `formatted` string takes precedence and compares the whole value
/// through the constructor; otherwise each non-null component is compared on its
/// own. `parent_param` is the parameter namespace the values live under
/// (`params`, `from`, `to`), or `None` when they are top-level parameters.
pub fn temporal_predicate_clauses(
    filters: &Map<String, Value>,
    variable: &str,
    temporal_args: &[TemporalArgument],
    parent_param: Option<&str>,
) -> Vec<PredicateClause> {
    let variable = safe_var(variable);
    let mut clauses = Vec::new();

    for arg in temporal_args {
        let Some(Value::Object(components)) = filters.get(&arg.name) else {
            continue;
        };
        let property = safe_property(&arg.name);
        let param_path = match parent_param {
            Some(parent) => format!("{}.{}", safe_property(parent), property),
            None => property.clone(),
        };
        let root_param = parent_param.unwrap_or(&arg.name).to_string();

        if components.get(FORMATTED).is_some_and(|v| !v.is_null()) {
            clauses.push(PredicateClause::new(
                format!(
                    "{}.{} = {}(${}.{})",
                    variable,
                    property,
                    arg.kind.constructor(),
                    param_path,
                    FORMATTED
                ),
                vec![root_param],
            ));
            continue;
        }

        for (component, value) in components {
            if value.is_null() {
                continue;
            }
            let component = safe_property(component);
            clauses.push(PredicateClause::new(
                format!(
                    "{}.{}.{} = ${}.{}",
                    variable, property, component, param_path, component
                ),
                vec![root_param.clone()],
            ));
        }
    }

    clauses
}

/// Parameter value to bind for a temporal write: the `formatted` string when
/// present, otherwise the component map without null components.
pub fn temporal_write_value(value: &Value) -> Value {
    match value {
        Value::Object(components) => match components.get(FORMATTED) {
            Some(formatted) if !formatted.is_null() => formatted.clone(),
            _ => Value::Object(
                components
                    .iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
        },
        Value::Array(items) => Value::Array(items.iter().map(temporal_write_value).collect()),
        other => other.clone(),
    }
}
