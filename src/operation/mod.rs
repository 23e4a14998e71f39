//! Resolved GraphQL operations
//!
//! A [`ResolvedOperation`] is the typed, schema-resolved view of one GraphQL root
//! field: which root it hangs off, the declared arguments with their supplied values,
//! the directives found on the field definition and the requested selection tree.
//!
//! The upstream GraphQL layer assembles it once per request. It is plain data and
//! round-trips through JSON (camelCase keys), which is how the CLI consumes it.

mod order_by;

pub use order_by::{OrderBy, SortDirection};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::translator::temporal::TemporalKind;

/// Which GraphQL root type the field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationRoot {
    Query,
    Mutation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOperation {
    pub root: OperationRoot,
    /// GraphQL root field name, e.g. `CreatePerson`
    pub field_name: String,
    /// Node label the field resolves to
    pub type_name: String,
    /// Root variable bound in the generated statement
    pub variable_name: String,
    pub schema_type: SchemaType,
    #[serde(default)]
    pub selections: Vec<Selection>,
    /// Declared arguments in declaration order
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderBy>,
    /// Internal node id filter (`_id`)
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<i64>,
    /// Request-scoped global parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cypher_params: Option<Map<String, Value>>,
}

impl ResolvedOperation {
    /// Start an operation for `type_name`, with the root variable derived from it
    /// (`Person` -> `person`) and an object schema type of the same name.
    pub fn new(root: OperationRoot, field_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            root,
            field_name: field_name.into(),
            variable_name: lower_first_letter(&type_name),
            schema_type: SchemaType::object(type_name.clone()),
            type_name,
            selections: Vec::new(),
            arguments: Vec::new(),
            directives: Vec::new(),
            first: None,
            offset: None,
            order_by: Vec::new(),
            internal_id: None,
            cypher_params: None,
        }
    }

    pub fn query(field_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(OperationRoot::Query, field_name, type_name)
    }

    pub fn mutation(field_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(OperationRoot::Mutation, field_name, type_name)
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    pub fn with_schema_type(mut self, schema_type: SchemaType) -> Self {
        self.schema_type = schema_type;
        self
    }

    pub fn is_mutation(&self) -> bool {
        self.root == OperationRoot::Mutation
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name == name)
    }

    /// Global parameters, treating an empty map the same as none at all
    pub fn global_params(&self) -> Option<&Map<String, Value>> {
        self.cypher_params.as_ref().filter(|params| !params.is_empty())
    }
}

/// Return type of the resolved field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaType {
    pub name: String,
    #[serde(default)]
    pub kind: SchemaTypeKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaTypeKind {
    #[default]
    Object,
    Scalar,
    Enum,
}

impl SchemaType {
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SchemaTypeKind::Object,
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SchemaTypeKind::Scalar,
        }
    }

    /// Scalars and enums have no properties to project
    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, SchemaTypeKind::Scalar | SchemaTypeKind::Enum)
    }

    /// One of the composite temporal output types (`_Neo4jDateTime`, ...)
    pub fn is_temporal(&self) -> bool {
        TemporalKind::from_type_name(&self.name).is_some()
    }

    /// Whether a map projection can be applied to values of this type
    pub fn is_projectable(&self) -> bool {
        !self.is_scalar() && !self.is_temporal()
    }
}

/// Declared GraphQL type of an argument or input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    /// Named type with list/non-null wrappers stripped
    pub name: String,
    #[serde(default)]
    pub non_null: bool,
    #[serde(default)]
    pub list: bool,
    /// Fields of an input object type, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<InputField>,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            non_null: false,
            list: false,
            fields: Vec::new(),
        }
    }

    pub fn non_null(name: impl Into<String>) -> Self {
        Self {
            non_null: true,
            ..Self::named(name)
        }
    }

    pub fn list_of(name: impl Into<String>) -> Self {
        Self {
            list: true,
            ..Self::named(name)
        }
    }

    pub fn input(name: impl Into<String>, fields: Vec<InputField>) -> Self {
        Self {
            fields,
            ..Self::named(name)
        }
    }

    pub fn temporal_kind(&self) -> Option<TemporalKind> {
        TemporalKind::from_input_type_name(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl InputField {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A declared argument and, if the caller supplied one, its value.
///
/// `value: None` means the argument was not supplied at all; `Some(Value::Null)`
/// means it was supplied as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

impl Argument {
    pub fn declared(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            value: None,
        }
    }

    pub fn supplied(name: impl Into<String>, ty: TypeRef, value: Value) -> Self {
        Self {
            name: name.into(),
            ty,
            value: Some(value),
        }
    }

    pub fn is_supplied(&self) -> bool {
        self.value.is_some()
    }
}

/// Keeps an explicit JSON `null` distinguishable from a missing key
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// String-valued argument; other value kinds count as absent
    pub fn string_argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).and_then(Value::as_str)
    }
}

/// One node of the requested selection tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selections: Vec<Selection>,
}

impl Selection {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            selections: Vec::new(),
        }
    }

    pub fn object(name: impl Into<String>, selections: Vec<Selection>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            selections,
        }
    }

    pub fn aliased(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Key under which the field appears in the response
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn is_leaf(&self) -> bool {
        self.selections.is_empty()
    }
}

/// `Person` -> `person`
pub fn lower_first_letter(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
