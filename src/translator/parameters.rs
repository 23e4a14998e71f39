//! Argument preparation and parameter bags.
//!
//! Every value that reaches the database travels in the parameter bag; generated
//! text only ever refers to it as `$name` or `$namespace.name`. Reserved top-level
//! keys:
//!
//! | key            | holds                                           |
//! |----------------|-------------------------------------------------|
//! | `cypherParams` | request-scoped global parameters                |
//! | `params`       | node create/update arguments                    |
//! | `data`         | relationship properties                         |
//! | `from` / `to`  | relationship endpoint selectors                 |
//!
//! Selection parameters are namespaced by the selection compiler's index and merged
//! in last.

use serde_json::{Map, Value};

use super::temporal::temporal_write_value;
use crate::operation::{Argument, ResolvedOperation, TypeRef};
use crate::utils::id_generation::IdGenerator;
use crate::utils::identifiers::{parameter_ref, safe_property};

pub type ParameterBag = Map<String, Value>;

pub const CYPHER_PARAMS: &str = "cypherParams";
pub const PARAMS: &str = "params";
pub const DATA: &str = "data";
pub const FROM: &str = "from";
pub const TO: &str = "to";
pub const FIRST: &str = "first";
pub const OFFSET: &str = "offset";

/// Supplied arguments split by nullness
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    null_params: Map<String, Value>,
    non_null_params: Map<String, Value>,
}

impl FilterParams {
    /// Partition the supplied arguments. Declared-but-unsupplied arguments belong
    /// to neither side.
    pub fn from_arguments(arguments: &[Argument]) -> Self {
        let mut filter = Self::default();
        for arg in arguments {
            match &arg.value {
                None => {}
                Some(Value::Null) => {
                    filter.null_params.insert(arg.name.clone(), Value::Null);
                }
                Some(value) => {
                    filter.non_null_params.insert(arg.name.clone(), value.clone());
                }
            }
        }
        filter
    }

    pub fn null_params(&self) -> &Map<String, Value> {
        &self.null_params
    }

    pub fn non_null_params(&self) -> &Map<String, Value> {
        &self.non_null_params
    }

    /// Non-null arguments whose value is a list
    pub fn array_params(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.non_null_params.iter().filter(|(_, v)| v.is_array())
    }

    pub fn is_empty(&self) -> bool {
        self.null_params.is_empty() && self.non_null_params.is_empty()
    }
}

/// Render `{k:$k, ...}` over `keys`, optionally namespaced and with the global
/// parameters appended. Returns an empty string when there is nothing to render.
pub fn params_to_string<'a, I>(keys: I, namespace: Option<&str>, with_globals: bool) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries: Vec<String> = keys
        .into_iter()
        .map(|key| format!("{}:{}", safe_property(key), parameter_ref(namespace, key)))
        .collect();
    if with_globals {
        entries.push(format!("{}: ${}", CYPHER_PARAMS, CYPHER_PARAMS));
    }
    if entries.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", entries.join(", "))
    }
}

/// Top-level pagination parameters, for the kinds that reference them
pub fn insert_pagination(bag: &mut ParameterBag, op: &ResolvedOperation) {
    if let Some(first) = op.first {
        bag.insert(FIRST.to_string(), Value::from(first));
    }
    if let Some(offset) = op.offset {
        bag.insert(OFFSET.to_string(), Value::from(offset));
    }
}

/// Every supplied argument, including explicit nulls, in declaration order
pub fn supplied_arguments(op: &ResolvedOperation) -> Map<String, Value> {
    op.arguments
        .iter()
        .filter_map(|arg| arg.value.clone().map(|value| (arg.name.clone(), value)))
        .collect()
}

/// Initial parameter bag of a mutation.
///
/// Node create/update keep their arguments under `params`; every other mutation
/// kind binds them at top level, which puts relationship inputs under `from`,
/// `to` and `data` by their argument names.
pub fn mutation_parameter_bag(op: &ResolvedOperation, namespaced: bool) -> ParameterBag {
    let arguments = supplied_arguments(op);
    let mut bag = if namespaced {
        let mut bag = ParameterBag::new();
        bag.insert(PARAMS.to_string(), Value::Object(arguments));
        bag
    } else {
        arguments
    };
    insert_pagination(&mut bag, op);
    bag
}

/// Generate a value for the first `id_type` argument when the caller left it out.
///
/// Returns the name of the argument that received a generated value.
pub fn possibly_set_first_id(
    arguments: &[Argument],
    params: &mut Map<String, Value>,
    id_type: &str,
    ids: &dyn IdGenerator,
) -> Option<String> {
    let arg = arguments.iter().find(|arg| arg.ty.name == id_type)?;
    if params.contains_key(&arg.name) {
        return None;
    }
    let value = ids.generate();
    log::debug!("Generated primary key for argument '{}'", arg.name);
    params.insert(arg.name.clone(), value);
    Some(arg.name.clone())
}

/// Build `key: $namespace.key` property statements for the values in `values`,
/// converting temporal values in place to what their Cypher constructor expects.
///
/// Keys with no matching declaration stay in `values` but get no statement.
pub fn build_cypher_parameters<'a, I>(
    declared: I,
    values: &mut Map<String, Value>,
    namespace: &str,
) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a TypeRef)>,
{
    let declared: Vec<(&str, &TypeRef)> = declared.into_iter().collect();
    let mut statements = Vec::new();

    for (key, value) in values.iter_mut() {
        let Some((_, ty)) = declared.iter().find(|(name, _)| *name == key.as_str()) else {
            continue;
        };
        let param = parameter_ref(Some(namespace), key);
        let property = safe_property(key);

        match ty.temporal_kind() {
            Some(kind) => {
                *value = temporal_write_value(value);
                if ty.list {
                    statements.push(format!(
                        "{}: [value IN {} | {}(value)]",
                        property,
                        param,
                        kind.constructor()
                    ));
                } else {
                    statements.push(format!("{}: {}({})", property, kind.constructor(), param));
                }
            }
            None => statements.push(format!("{}:{}", property, param)),
        }
    }

    statements
}

/// Split `key` out of the map, returning `(key entry, everything else)`
pub fn split_selection_parameters(
    values: &Map<String, Value>,
    key: &str,
) -> (Map<String, Value>, Map<String, Value>) {
    values
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .partition(|(k, _)| k == key)
}

/// Merge selection parameters and the global parameters into the bag
pub fn finish_parameter_bag(
    mut bag: ParameterBag,
    selection_params: ParameterBag,
    globals: Option<&Map<String, Value>>,
) -> ParameterBag {
    bag.extend(selection_params);
    if let Some(globals) = globals {
        bag.insert(CYPHER_PARAMS.to_string(), Value::Object(globals.clone()));
    }
    bag
}

/// Declared `(name, type)` pairs of the operation arguments
pub fn declared_arguments(arguments: &[Argument]) -> impl Iterator<Item = (&str, &TypeRef)> {
    arguments.iter().map(|arg| (arg.name.as_str(), &arg.ty))
}
