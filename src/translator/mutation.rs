//! Node mutations: custom `@cypher` mutations and generated create/update/delete.
//!
//! Update and delete select their node by the first declared argument. A scalar
//! key is matched inline in the pattern (`{id: $params.id}`); a temporal key has
//! no single value to match on and goes through WHERE predicates instead.

use serde_json::{Map, Value};

use super::clauses::{order_by_clause, skip_limit_clause};
use super::errors::TranslateError;
use super::parameters::{
    build_cypher_parameters, declared_arguments, finish_parameter_bag, insert_pagination,
    mutation_parameter_bag, params_to_string, possibly_set_first_id, split_selection_parameters,
    supplied_arguments, ParameterBag, PARAMS,
};
use super::predicates::{join_predicates, PredicateBuilder};
use super::query::{custom_statement, escape_statement};
use super::temporal::temporal_arguments;
use super::{Query, Translator};
use crate::operation::{Argument, ResolvedOperation};
use crate::utils::identifiers::{parameter_ref, safe_label, safe_property, safe_var};

/// Run the directive's statement through `apoc.cypher.doIt` and bind the first
/// column of its single row to the root variable.
pub fn custom_mutation(translator: &Translator<'_>, op: &ResolvedOperation) -> Result<Query, TranslateError> {
    let statement = custom_statement(translator, op)?;
    let variable = safe_var(&op.variable_name);
    let bag = mutation_parameter_bag(op, false);

    let arg_string = params_to_string(
        bag.keys().map(String::as_str),
        None,
        op.global_params().is_some(),
    );
    let arg_string = if arg_string.is_empty() {
        "{}".to_string()
    } else {
        arg_string
    };

    let projection = translator.project(op, &op.variable_name, None)?;
    let returned = if op.schema_type.is_projectable() {
        format!(
            "{{{}}} AS {}{} {}",
            projection.fragment,
            variable,
            order_by_clause(&op.variable_name, &op.order_by),
            skip_limit_clause(op)
        )
    } else {
        String::new()
    };

    let text = format!(
        "CALL apoc.cypher.doIt(\"{statement}\", {arg_string}) YIELD value\n\
         WITH apoc.map.values(value, [keys(value)[0]])[0] AS {variable}\n\
         RETURN {variable} {returned}",
        statement = escape_statement(statement),
    );

    Ok(Query::new(
        text,
        finish_parameter_bag(bag, projection.parameters, op.global_params()),
    ))
}

/// `CREATE (var:Label {k: $params.k, ...}) RETURN var {...} AS var`
pub fn node_create(translator: &Translator<'_>, op: &ResolvedOperation) -> Result<Query, TranslateError> {
    let variable = safe_var(&op.variable_name);
    let label = safe_label(&op.type_name);

    let mut params = supplied_arguments(op);
    possibly_set_first_id(
        &op.arguments,
        &mut params,
        &translator.config().id_type,
        translator.id_generator(),
    );
    let statements = build_cypher_parameters(declared_arguments(&op.arguments), &mut params, PARAMS);

    let projection = translator.project(op, &op.variable_name, None)?;
    let text = format!(
        "CREATE ({variable}:{label} {{{statements}}})\nRETURN {variable} {{{fragment}}} AS {variable}",
        statements = statements.join(", "),
        fragment = projection.fragment,
    );

    Ok(Query::new(
        text,
        finish_parameter_bag(namespaced_bag(op, params), projection.parameters, op.global_params()),
    ))
}

/// Match by primary key, `SET var += {...}` the remaining arguments, return the
/// updated node. The key stays in `params` even though it is not SET.
pub fn node_update(translator: &Translator<'_>, op: &ResolvedOperation) -> Result<Query, TranslateError> {
    let variable = safe_var(&op.variable_name);
    let label = safe_label(&op.type_name);
    let primary_key = primary_key_argument(op)?;

    let params = supplied_arguments(op);
    let (key_param, mut update_params) = split_selection_parameters(&params, &primary_key.name);

    let match_clause = primary_key_match(
        &op.variable_name,
        &label,
        primary_key,
        &key_param,
        op,
        Some(PARAMS),
    );
    let statements =
        build_cypher_parameters(declared_arguments(&op.arguments), &mut update_params, PARAMS);

    let mut text = format!("{}\n", match_clause);
    if !statements.is_empty() {
        text.push_str(&format!("SET {} += {{{}}}\n", variable, statements.join(", ")));
    }

    let projection = translator.project(op, &op.variable_name, None)?;
    text.push_str(&format!(
        "RETURN {variable} {{{}}} AS {variable}",
        projection.fragment
    ));

    // Split out for matching, but downstream consumers still read it from `params`
    update_params.extend(key_param);

    Ok(Query::new(
        text,
        finish_parameter_bag(
            namespaced_bag(op, update_params),
            projection.parameters,
            op.global_params(),
        ),
    ))
}

/// Match by primary key, project, then delete.
///
/// A deleted node can't be projected, so the projection is computed under the
/// original alias while the node itself moves to `<var>_toDelete`, which is what
/// gets deleted. The returned value is the projection taken before the delete.
pub fn node_delete(translator: &Translator<'_>, op: &ResolvedOperation) -> Result<Query, TranslateError> {
    let variable = safe_var(&op.variable_name);
    let label = safe_label(&op.type_name);
    let primary_key = primary_key_argument(op)?;

    let bag = mutation_parameter_bag(op, false);
    let (key_param, _) = split_selection_parameters(&bag, &primary_key.name);
    let match_clause =
        primary_key_match(&op.variable_name, &label, primary_key, &key_param, op, None);

    let projection = translator.project(op, &op.variable_name, None)?;
    let deletion_variable = safe_var(&format!("{}_toDelete", op.variable_name));

    let text = format!(
        "{match_clause}\n\
         WITH {variable} AS {deletion_variable}, {variable} {{{fragment}}} AS {variable}\n\
         DETACH DELETE {deletion_variable}\n\
         RETURN {variable}",
        fragment = projection.fragment,
    );

    Ok(Query::new(
        text,
        finish_parameter_bag(bag, projection.parameters, op.global_params()),
    ))
}

/// First declared argument, which must have been supplied with a non-null value
fn primary_key_argument(op: &ResolvedOperation) -> Result<&Argument, TranslateError> {
    let primary_key = op
        .arguments
        .first()
        .ok_or_else(|| TranslateError::missing_argument(&op.field_name, "primary key"))?;
    if matches!(primary_key.value, None | Some(Value::Null)) {
        return Err(TranslateError::missing_argument(
            &op.field_name,
            &primary_key.name,
        ));
    }
    Ok(primary_key)
}

/// `MATCH (var:Label) WHERE <temporal key>` or `MATCH (var:Label {key: $key})`
fn primary_key_match(
    variable: &str,
    label: &str,
    primary_key: &Argument,
    key_param: &Map<String, Value>,
    op: &ResolvedOperation,
    namespace: Option<&str>,
) -> String {
    let temporal_args = temporal_arguments(declared_arguments(&op.arguments));
    let clauses = PredicateBuilder::new(variable)
        .temporal(key_param, &temporal_args, namespace)
        .build();
    let variable = safe_var(variable);

    match join_predicates(&clauses) {
        Some(predicates) => format!("MATCH ({}:{}) WHERE {}", variable, label, predicates),
        None => format!(
            "MATCH ({}:{} {{{}: {}}})",
            variable,
            label,
            safe_property(&primary_key.name),
            parameter_ref(namespace, &primary_key.name)
        ),
    }
}

fn namespaced_bag(op: &ResolvedOperation, params: Map<String, Value>) -> ParameterBag {
    let mut bag = ParameterBag::new();
    bag.insert(PARAMS.to_string(), Value::Object(params));
    insert_pagination(&mut bag, op);
    bag
}
