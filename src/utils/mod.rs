pub mod id_generation;
pub mod identifiers;
