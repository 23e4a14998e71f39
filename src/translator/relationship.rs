//! Relationship mutations (`Add*` / `Remove*`).
//!
//! Both endpoints are matched by the first field of their input type, using the
//! same temporal-vs-inline rule as node update/delete, with the endpoint values
//! living under the `from` and `to` parameters.

use serde_json::{Map, Value};

use super::errors::TranslateError;
use super::mutation_meta::MutationMeta;
use super::parameters::{
    build_cypher_parameters, finish_parameter_bag, mutation_parameter_bag,
    split_selection_parameters, DATA, FROM, TO,
};
use super::predicates::{join_predicates, PredicateBuilder};
use super::temporal::{temporal_arguments, TemporalArgument};
use super::{Query, Translator};
use crate::operation::{lower_first_letter, ResolvedOperation};
use crate::selection::RelationshipLinkage;
use crate::utils::identifiers::{parameter_ref, safe_label, safe_property, safe_var};

/// One side of the relationship
#[derive(Debug)]
struct Endpoint<'a> {
    /// Parameter namespace, `from` or `to`
    namespace: &'static str,
    variable: String,
    label: String,
    key: &'a str,
    temporal_args: Vec<TemporalArgument>,
    values: &'a Map<String, Value>,
}

impl<'a> Endpoint<'a> {
    fn resolve(
        op: &'a ResolvedOperation,
        namespace: &'static str,
        type_name: &str,
    ) -> Result<Self, TranslateError> {
        let argument = op
            .argument(namespace)
            .ok_or_else(|| TranslateError::missing_argument(&op.field_name, namespace))?;
        let Some(Value::Object(values)) = &argument.value else {
            return Err(TranslateError::missing_argument(&op.field_name, namespace));
        };
        let key = argument.ty.fields.first().map(|field| field.name.as_str()).ok_or_else(|| {
            TranslateError::missing_argument(&op.field_name, format!("{}.<primary key>", namespace))
        })?;
        if values.get(key).map_or(true, Value::is_null) {
            return Err(TranslateError::missing_argument(
                &op.field_name,
                format!("{}.{}", namespace, key),
            ));
        }

        Ok(Self {
            namespace,
            variable: format!("{}_{}", lower_first_letter(type_name), namespace),
            label: safe_label(type_name),
            key,
            temporal_args: temporal_arguments(
                argument.ty.fields.iter().map(|field| (field.name.as_str(), &field.ty)),
            ),
            values,
        })
    }

    fn var(&self) -> String {
        safe_var(&self.variable)
    }

    /// `MATCH (v:Label) WHERE ...` for a temporal key, `MATCH (v:Label {key: $ns.key})` otherwise.
    /// Only the key selects the node; other supplied fields are ignored.
    fn match_clause(&self) -> String {
        let (key_param, _) = split_selection_parameters(self.values, self.key);
        let key_temporal: Vec<TemporalArgument> = self
            .temporal_args
            .iter()
            .filter(|arg| arg.name == self.key)
            .cloned()
            .collect();
        let clauses = PredicateBuilder::new(&self.variable)
            .temporal(&key_param, &key_temporal, Some(self.namespace))
            .build();
        match join_predicates(&clauses) {
            Some(predicates) => format!("MATCH ({}:{}) WHERE {}", self.var(), self.label, predicates),
            None => format!(
                "MATCH ({}:{} {{{}: {}}})",
                self.var(),
                self.label,
                safe_property(self.key),
                parameter_ref(Some(self.namespace), self.key)
            ),
        }
    }
}

/// The endpoint a payload resolves against: the far side when the payload type
/// is the from-type itself, the from-endpoint otherwise.
fn projected_endpoint<'e>(op: &ResolvedOperation, meta: &MutationMeta, from: &'e str, to: &'e str) -> &'e str {
    if op.schema_type.name == meta.from_type {
        to
    } else {
        from
    }
}

/// Match both endpoints and `CREATE` the relationship with its `data` properties
pub fn relationship_create(
    translator: &Translator<'_>,
    op: &ResolvedOperation,
) -> Result<Query, TranslateError> {
    let meta = MutationMeta::resolve(op, &translator.config().mutation_meta_directive)?;
    let from = Endpoint::resolve(op, FROM, &meta.from_type)?;
    let to = Endpoint::resolve(op, TO, &meta.to_type)?;

    let mut bag = mutation_parameter_bag(op, false);
    let mut statements = Vec::new();
    if let Some(data_arg) = op.argument(DATA) {
        if let Some(Value::Object(data)) = bag.get_mut(DATA) {
            statements = build_cypher_parameters(
                data_arg.ty.fields.iter().map(|field| (field.name.as_str(), &field.ty)),
                data,
                DATA,
            );
        }
    }

    let relationship_variable = safe_var(&format!(
        "{}_relation",
        meta.relationship_type_name.to_lowercase()
    ));
    let linkage = RelationshipLinkage {
        from: from.variable.clone(),
        to: to.variable.clone(),
        relationship: Some(relationship_variable.clone()),
    };
    let projection = translator.project(
        op,
        projected_endpoint(op, &meta, &from.variable, &to.variable),
        Some(&linkage),
    )?;

    let properties = if statements.is_empty() {
        String::new()
    } else {
        format!(" {{{}}}", statements.join(", "))
    };
    let text = format!(
        "{from_match}\n\
         {to_match}\n\
         CREATE ({from_var})-[{relationship_variable}:{relationship_label}{properties}]->({to_var})\n\
         RETURN {relationship_variable} {{ {fragment} }} AS {payload}",
        from_match = from.match_clause(),
        to_match = to.match_clause(),
        from_var = from.var(),
        to_var = to.var(),
        relationship_label = safe_label(&meta.relationship_type_name),
        fragment = projection.fragment,
        payload = safe_var(&op.schema_type.name),
    );

    Ok(Query::new(
        text,
        finish_parameter_bag(bag, projection.parameters, op.global_params()),
    ))
}

/// Match both endpoints, delete the relationship if there is one, and project the
/// surviving endpoint nodes.
pub fn relationship_delete(
    translator: &Translator<'_>,
    op: &ResolvedOperation,
) -> Result<Query, TranslateError> {
    let meta = MutationMeta::resolve(op, &translator.config().mutation_meta_directive)?;
    let from = Endpoint::resolve(op, FROM, &meta.from_type)?;
    let to = Endpoint::resolve(op, TO, &meta.to_type)?;
    let bag = mutation_parameter_bag(op, false);

    let relationship_variable = safe_var(&format!("{}{}", from.variable, to.variable));
    let from_root = safe_var(&format!("_{}", from.variable));
    let to_root = safe_var(&format!("_{}", to.variable));
    let linkage = RelationshipLinkage {
        from: from_root.clone(),
        to: to_root.clone(),
        relationship: None,
    };
    let projection = translator.project(
        op,
        projected_endpoint(op, &meta, &from_root, &to_root),
        Some(&linkage),
    )?;

    let text = format!(
        "{from_match}\n\
         {to_match}\n\
         OPTIONAL MATCH ({from_var})-[{relationship_variable}:{relationship_label}]->({to_var})\n\
         DELETE {relationship_variable}\n\
         WITH COUNT(*) AS scope, {from_var} AS {from_root}, {to_var} AS {to_root}\n\
         RETURN {{{fragment}}} AS {payload}",
        from_match = from.match_clause(),
        to_match = to.match_clause(),
        from_var = from.var(),
        to_var = to.var(),
        relationship_label = safe_label(&meta.relationship_type_name),
        fragment = projection.fragment,
        payload = safe_var(&op.schema_type.name),
    );

    Ok(Query::new(
        text,
        finish_parameter_bag(bag, projection.parameters, op.global_params()),
    ))
}
