use thiserror::Error;

/// Translation failures. All of them are raised before any text is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error(
        "Unsupported mutation '{field_name}' (no custom statement directive and the field name does not start with Create, Update, Delete, Add or Remove)"
    )]
    UnsupportedMutationKind { field_name: String },

    #[error("Missing mutation meta on '{field_name}': {detail}")]
    MissingMutationMeta { field_name: String, detail: String },

    #[error("Missing argument '{argument}' on '{field_name}'")]
    MissingEndpointArgument { field_name: String, argument: String },

    #[error("Custom statement directive @{directive} on '{field_name}' has no statement")]
    MissingCustomStatement { field_name: String, directive: String },

    #[error("Selection compiler error: {0}")]
    Selection(String),
}

impl TranslateError {
    pub fn missing_argument(field_name: impl Into<String>, argument: impl Into<String>) -> Self {
        TranslateError::MissingEndpointArgument {
            field_name: field_name.into(),
            argument: argument.into(),
        }
    }

    pub fn missing_meta(field_name: impl Into<String>, detail: impl Into<String>) -> Self {
        TranslateError::MissingMutationMeta {
            field_name: field_name.into(),
            detail: detail.into(),
        }
    }
}
