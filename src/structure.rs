//! Key-layout fingerprint of a JSON tree
//!
//! Mapping-valued children are recursed into under their own key; every
//! other child (scalar or array) is only recorded by name in the `__keys`
//! list of its parent mapping.

use serde_json::{Map, Value};

/// Reserved key holding the names of a mapping's non-mapping children
pub const KEYS_FIELD: &str = "__keys";

/// Generate the structure artifact for `tree`.
///
/// A root that is not a mapping is returned unchanged.
pub fn generate_structure(tree: &Value) -> Value {
    match tree {
        Value::Object(obj) => Value::Object(structure_of(obj)),
        other => other.clone(),
    }
}

fn structure_of(obj: &Map<String, Value>) -> Map<String, Value> {
    let mut structure = Map::new();

    for (key, value) in obj.iter() {
        match value {
            Value::Object(child) if key != KEYS_FIELD => {
                structure.insert(key.clone(), Value::Object(structure_of(child)));
            }
            _ => {
                // Created on first use so it sits where the first leaf was
                if let Value::Array(keys) = structure
                    .entry(KEYS_FIELD)
                    .or_insert_with(|| Value::Array(Vec::new()))
                {
                    keys.push(Value::String(key.clone()));
                }
            }
        }
    }

    structure
}
