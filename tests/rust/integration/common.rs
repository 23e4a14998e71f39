use graphql_cypher::selection::FlatSelectionCompiler;
use graphql_cypher::{Query, ResolvedOperation, TranslateError, Translator};
use serde_json::Value;

pub const GENERATED_ID: &str = "2c1b6b0c-3f5c-4c59-9a4c-5a0b3b1b1b1b";

pub fn generated_id() -> Value {
    Value::String(GENERATED_ID.to_string())
}

pub fn operation(json: Value) -> ResolvedOperation {
    serde_json::from_value(json).expect("valid resolved operation")
}

pub fn translate(json: Value) -> Result<Query, TranslateError> {
    let op = operation(json);
    Translator::new(&FlatSelectionCompiler, &generated_id).translate(&op)
}

/// Collapse runs of whitespace so assertions don't depend on line layout
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
