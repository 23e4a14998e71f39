use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use validator::Validate;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Schema vocabulary the translator looks for on resolved operations
#[derive(Clone, Debug, PartialEq, Eq, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Directive carrying a custom Cypher statement
    #[validate(length(min = 1, message = "Custom statement directive name cannot be empty"))]
    pub cypher_directive: String,

    /// Argument of the custom statement directive holding the statement text
    #[validate(length(min = 1, message = "Statement argument name cannot be empty"))]
    pub statement_argument: String,

    /// Directive linking Add/Remove mutations to a relationship type
    #[validate(length(min = 1, message = "Mutation meta directive name cannot be empty"))]
    pub mutation_meta_directive: String,

    /// GraphQL type name of generated primary keys
    #[validate(length(min = 1, message = "Id type name cannot be empty"))]
    pub id_type: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            cypher_directive: "cypher".to_string(),
            statement_argument: "statement".to_string(),
            mutation_meta_directive: "MutationMeta".to_string(),
            id_type: "ID".to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            cypher_directive: env_or("GRAPHQL_CYPHER_DIRECTIVE", defaults.cypher_directive)?,
            statement_argument: env_or(
                "GRAPHQL_CYPHER_STATEMENT_ARGUMENT",
                defaults.statement_argument,
            )?,
            mutation_meta_directive: env_or(
                "GRAPHQL_CYPHER_MUTATION_META_DIRECTIVE",
                defaults.mutation_meta_directive,
            )?,
            id_type: env_or("GRAPHQL_CYPHER_ID_TYPE", defaults.id_type)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file. Missing keys take their defaults.
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }
}

/// Unset variables fall back to `default`; a set but non-UTF-8 value is an error
fn env_or(key: &str, default: String) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e.into()),
    }
}
