//! JSON Schema input.

use serde_json::Value;

use compkit_core::{CompkitError, CompkitResult};

use crate::emit::render_interfaces;
use crate::field::FieldSchema;

/// Map a property schema to a TypeScript type.
fn map_type(schema: &Value) -> String {
    match schema.get("type").and_then(Value::as_str) {
        Some("string") => "string".to_string(),
        Some("number") => "number".to_string(),
        Some("boolean") => "boolean".to_string(),
        Some("array") => {
            let item = schema
                .get("items")
                .map(map_type)
                .unwrap_or_else(|| "any".to_string());
            format!("{}[]", item)
        }
        Some("object") => match schema.get("additionalProperties") {
            Some(Value::Bool(true)) | Some(Value::Object(_)) => "Record<string, any>".to_string(),
            _ => "object".to_string(),
        },
        _ => "any".to_string(),
    }
}

/// Extract fields from a schema's `properties`, in document order.
///
/// A schema without `properties` yields no fields.
pub fn json_schema_fields(schema: &Value) -> Vec<FieldSchema> {
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };

    properties
        .iter()
        .map(|(name, property)| {
            let field = FieldSchema::new(
                name.as_str(),
                map_type(property),
                required.contains(&name.as_str()),
            );
            match property.get("description").and_then(Value::as_str) {
                Some(description) => field.with_description(description),
                None => field,
            }
        })
        .collect()
}

/// Render interfaces for a parsed JSON Schema document.
pub fn from_json_schema(schema: &Value, type_name: &str) -> String {
    let fields = json_schema_fields(schema);
    tracing::debug!(type_name, fields = fields.len(), "extracted JSON schema fields");
    render_interfaces(type_name, &fields)
}

/// Parse JSON Schema text and render interfaces.
///
/// Fails on invalid JSON or when the document is not an object.
pub fn from_json_schema_str(text: &str, type_name: &str) -> CompkitResult<String> {
    let schema: Value = serde_json::from_str(text)?;
    if !schema.is_object() {
        return Err(CompkitError::InvalidSchema(
            "JSON schema must be an object".to_string(),
        ));
    }
    Ok(from_json_schema(&schema, type_name))
}
