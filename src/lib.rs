//! graphql-cypher - GraphQL operation to Cypher translation
//!
//! This crate turns a resolved GraphQL operation into a single parameterized
//! Cypher statement:
//! - Operation classification (generated queries, custom `@cypher` fields,
//!   node create/update/delete, relationship add/remove)
//! - Argument preparation and parameter namespacing
//! - WHERE clause construction, including temporal arguments
//! - Statement synthesis around an external selection compiler
//!
//! ```
//! use graphql_cypher::operation::{ResolvedOperation, Selection};
//! use graphql_cypher::selection::FlatSelectionCompiler;
//! use graphql_cypher::translator::Translator;
//! use graphql_cypher::utils::id_generation::UuidGenerator;
//!
//! let op = ResolvedOperation::query("Person", "Person").with_selection(Selection::field("name"));
//! let query = Translator::new(&FlatSelectionCompiler, &UuidGenerator).translate(&op).unwrap();
//! assert_eq!(query.text(), "MATCH (person:Person ) RETURN person {.name} AS person ");
//! ```

pub mod utils;

pub mod config;
pub mod operation;
pub mod selection;
pub mod translator;

pub use config::TranslatorConfig;
pub use operation::ResolvedOperation;
pub use translator::{Kind, Query, TranslateError, Translator};
