//! Primary-key generation for node creation.
//!
//! When a create mutation declares an `ID` argument but the caller does not
//! supply it, the translator asks an [`IdGenerator`] for a fresh value and binds
//! it as a regular parameter. The generator is injected so tests can use a
//! deterministic sequence.

use serde_json::Value;

/// Source of fresh primary-key values
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Value;
}

/// Random (v4) UUID strings
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> Value {
        Value::String(uuid::Uuid::new_v4().to_string())
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> Value + Send + Sync,
{
    fn generate(&self) -> Value {
        self()
    }
}
