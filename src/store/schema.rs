//! JSON Schema check for container files.
//!
//! The schema ships inside the crate (`schema/container.schema.json`) so a
//! container is checked against exactly the layout this build understands.
//! Validation happens before typed deserialisation, which keeps error
//! messages pointed at the offending JSON location instead of a serde path.

use crate::error::StoreError;
use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::path::Path;

const CONTAINER_SCHEMA: &str = include_str!("../../schema/container.schema.json");

static COMPILED_SCHEMA: Lazy<Result<JSONSchema, String>> = Lazy::new(|| {
    let schema: Value = serde_json::from_str(CONTAINER_SCHEMA)
        .map_err(|err| format!("container schema is not valid JSON: {err}"))?;
    JSONSchema::compile(&schema).map_err(|err| format!("container schema does not compile: {err}"))
});

pub(crate) fn validate_container(path: &Path, container: &Value) -> Result<(), StoreError> {
    let compiled = COMPILED_SCHEMA
        .as_ref()
        .map_err(|detail| StoreError::Invalid {
            path: path.to_path_buf(),
            details: detail.clone(),
        })?;

    if let Err(errors) = compiled.validate(container) {
        let details = errors
            .map(|err| format!("{}: {err}", err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(StoreError::Invalid {
            path: path.to_path_buf(),
            details,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_minimal_container() {
        let value = json!({"format": "halocat-container-v1"});
        validate_container(Path::new("x.json"), &value).unwrap();
    }

    #[test]
    fn schema_compiles_once_and_is_reused() {
        let first = COMPILED_SCHEMA.as_ref().unwrap() as *const JSONSchema;
        let value = json!({"format": "halocat-container-v1"});
        validate_container(Path::new("a.json"), &value).unwrap();
        validate_container(Path::new("b.json"), &value).unwrap();
        assert!(std::ptr::eq(first, COMPILED_SCHEMA.as_ref().unwrap()));
    }

    #[test]
    fn rejects_wrong_format_and_bad_dtype() {
        let wrong_format = json!({"format": "something-else"});
        assert!(validate_container(Path::new("x.json"), &wrong_format).is_err());

        let bad_dtype = json!({
            "format": "halocat-container-v1",
            "members": {"Mass": {"dataset": {"dtype": "complex", "shape": [1], "data": [1.0]}}}
        });
        let err = validate_container(Path::new("x.json"), &bad_dtype).unwrap_err();
        assert!(err.to_string().contains("x.json"));
    }
}
