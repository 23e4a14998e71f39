use super::{Projection, RelationshipLinkage, SelectionCompiler, SelectionRequest};
use crate::operation::Selection;
use crate::translator::errors::TranslateError;
use crate::utils::identifiers::{safe_property, safe_var};

const INTERNAL_ID_FIELD: &str = "_id";
const TYPENAME_FIELD: &str = "__typename";
const FROM_FIELD: &str = "from";
const TO_FIELD: &str = "to";

/// Projects leaf fields only.
///
/// - `name` -> `.name`, `alias: name` -> `alias: var.name`
/// - `_id` -> `_id: ID(var)`
/// - `__typename` is skipped
/// - `from { ... }` / `to { ... }` under a relationship mutation project the
///   matching endpoint node one level deep
///
/// Any other nested selection needs a schema-aware compiler and is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatSelectionCompiler;

impl SelectionCompiler for FlatSelectionCompiler {
    fn compile(&self, request: &SelectionRequest<'_>) -> Result<Projection, TranslateError> {
        // Without a bound relationship the projection is a bare map literal, which
        // has no implicit base for `.field` shorthand.
        let bare_map = matches!(request.parent, Some(RelationshipLinkage { relationship: None, .. }));
        let mut entries = Vec::with_capacity(request.selections.len());

        for selection in request.selections {
            if selection.name == TYPENAME_FIELD {
                continue;
            }
            if selection.is_leaf() {
                entries.push(leaf_entry(selection, request.variable_name, bare_map));
                continue;
            }
            let endpoint = request.parent.and_then(|parent| match selection.name.as_str() {
                FROM_FIELD => Some(parent.from.as_str()),
                TO_FIELD => Some(parent.to.as_str()),
                _ => None,
            });
            match endpoint {
                Some(variable) => entries.push(endpoint_entry(selection, variable)?),
                None => {
                    return Err(TranslateError::Selection(format!(
                        "nested selection '{}' on {} needs a schema-aware selection compiler",
                        selection.name, request.schema_type.name
                    )))
                }
            }
        }

        Ok(Projection {
            fragment: entries.join(", "),
            parameters: Default::default(),
            next_param_index: request.param_index,
        })
    }
}

fn leaf_entry(selection: &Selection, variable: &str, bare_map: bool) -> String {
    let variable = safe_var(variable);
    let key = safe_property(selection.response_key());
    if selection.name == INTERNAL_ID_FIELD {
        return format!("{}: ID({})", key, variable);
    }
    if selection.alias.is_none() && !bare_map {
        format!(".{}", key)
    } else {
        format!("{}: {}.{}", key, variable, safe_property(&selection.name))
    }
}

fn endpoint_entry(selection: &Selection, variable: &str) -> Result<String, TranslateError> {
    let mut fields = Vec::with_capacity(selection.selections.len());
    for field in &selection.selections {
        if field.name == TYPENAME_FIELD {
            continue;
        }
        if !field.is_leaf() {
            return Err(TranslateError::Selection(format!(
                "nested selection '{}.{}' needs a schema-aware selection compiler",
                selection.name, field.name
            )));
        }
        fields.push(leaf_entry(field, variable, false));
    }
    Ok(format!(
        "{}: {} {{{}}}",
        safe_property(selection.response_key()),
        safe_var(variable),
        fields.join(", ")
    ))
}
