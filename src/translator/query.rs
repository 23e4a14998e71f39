//! Read operations: generated node queries and custom `@cypher` queries.

use serde_json::Value;

use super::clauses::{order_by_clause, skip_limit_clause};
use super::errors::TranslateError;
use super::parameters::{
    declared_arguments, finish_parameter_bag, insert_pagination, params_to_string, FilterParams,
    ParameterBag,
};
use super::predicates::{where_clause, PredicateBuilder, INTERNAL_ID_PARAM};
use super::temporal::temporal_arguments;
use super::{Query, Translator};
use crate::operation::ResolvedOperation;
use crate::utils::identifiers::{safe_label, safe_var};

/// `MATCH (var:Label {inline}) WHERE ... RETURN var {...} AS var ORDER BY ... SKIP/LIMIT`
///
/// Scalar arguments are matched inline in the pattern; null, temporal and list
/// arguments become WHERE predicates.
pub fn node_query(translator: &Translator<'_>, op: &ResolvedOperation) -> Result<Query, TranslateError> {
    let variable = safe_var(&op.variable_name);
    let label = safe_label(&op.type_name);
    let filter = FilterParams::from_arguments(&op.arguments);
    let temporal_args = temporal_arguments(declared_arguments(&op.arguments));

    let inline_keys = filter
        .non_null_params()
        .iter()
        .filter(|(key, value)| {
            !value.is_array() && !temporal_args.iter().any(|t| &t.name == *key)
        })
        .map(|(key, _)| key.as_str());
    let arg_string = params_to_string(inline_keys, None, false);

    let predicates =
        PredicateBuilder::for_filter(&op.variable_name, op.internal_id.is_some(), &filter, &temporal_args)
            .build();

    let projection = translator.project(op, &op.variable_name, None)?;

    let text = format!(
        "MATCH ({variable}:{label} {arg_string}) {predicate}RETURN {variable} {{{fragment}}} AS {variable}{order_by} {skip_limit}",
        predicate = where_clause(&predicates),
        fragment = projection.fragment,
        order_by = order_by_clause(&op.variable_name, &op.order_by),
        skip_limit = skip_limit_clause(op),
    );

    let mut bag: ParameterBag = filter.non_null_params().clone();
    insert_pagination(&mut bag, op);
    if let Some(id) = op.internal_id {
        bag.insert(INTERNAL_ID_PARAM.to_string(), Value::from(id));
    }

    Ok(Query::new(
        text,
        finish_parameter_bag(bag, projection.parameters, op.global_params()),
    ))
}

/// Run the directive's statement through `apoc.cypher.runFirstColumn` and unwind
/// its rows into the root variable.
///
/// Scalar and temporal results can't take a map projection, so they're returned
/// as-is without ORDER BY.
pub fn custom_query(translator: &Translator<'_>, op: &ResolvedOperation) -> Result<Query, TranslateError> {
    let statement = custom_statement(translator, op)?;
    let variable = safe_var(&op.variable_name);
    let filter = FilterParams::from_arguments(&op.arguments);

    let mut bag: ParameterBag = filter.non_null_params().clone();
    insert_pagination(&mut bag, op);

    let arg_string = params_to_string(
        bag.keys().map(String::as_str),
        None,
        op.global_params().is_some(),
    );
    let arg_string = if arg_string.is_empty() {
        "null".to_string()
    } else {
        arg_string
    };

    let projection = translator.project(op, &op.variable_name, None)?;
    let returned = if op.schema_type.is_projectable() {
        format!(
            "{{{}}} AS {}{}",
            projection.fragment,
            variable,
            order_by_clause(&op.variable_name, &op.order_by)
        )
    } else {
        String::new()
    };

    let text = format!(
        "WITH apoc.cypher.runFirstColumn(\"{statement}\", {arg_string}, True) AS x UNWIND x AS {variable} RETURN {variable} {returned} {skip_limit}",
        statement = escape_statement(statement),
        skip_limit = skip_limit_clause(op),
    );

    Ok(Query::new(
        text,
        finish_parameter_bag(bag, projection.parameters, op.global_params()),
    ))
}

/// Statement text of the custom statement directive
pub(crate) fn custom_statement<'o>(
    translator: &Translator<'_>,
    op: &'o ResolvedOperation,
) -> Result<&'o str, TranslateError> {
    let config = translator.config();
    op.directive(&config.cypher_directive)
        .and_then(|directive| directive.string_argument(&config.statement_argument))
        .ok_or_else(|| TranslateError::MissingCustomStatement {
            field_name: op.field_name.clone(),
            directive: config.cypher_directive.clone(),
        })
}

/// The statement is trusted schema text, but it is embedded in a double-quoted
/// string literal and must not terminate it.
pub(crate) fn escape_statement(statement: &str) -> String {
    statement.replace('\\', "\\\\").replace('"', "\\\"")
}
