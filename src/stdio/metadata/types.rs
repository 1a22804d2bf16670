//! Static description of one advertised tool.

use std::sync::Arc;

use rmcp::model::JsonObject;
use rmcp::schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};

/// Catalogue entry for a tool: what `tools/list` shows and `--list-tools` prints.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    pub name: &'static str,
    /// `reasoning` for the strategy tools, `command` for the auto-iterating wrappers.
    pub category: &'static str,
    pub description: &'static str,
    /// Input schema, always a JSON object.
    pub schema: Arc<JsonObject>,
}

impl ToolMetadata {
    /// First sentence of the description.
    pub fn summary(&self) -> &'static str {
        self.description
            .split(". ")
            .next()
            .unwrap_or(self.description)
    }
}

/// Input schema for the arguments type `T`.
pub fn build_schema<T: JsonSchema>() -> Arc<JsonObject> {
    Arc::new(object_schema(
        std::any::type_name::<T>(),
        serde_json::to_value(schema_for!(T)),
    ))
}

/// Keep a generated schema that is an object. Anything else is logged and
/// replaced by a bare object schema, so a client still sees `"type": "object"`.
fn object_schema(args_type: &str, generated: serde_json::Result<Value>) -> JsonObject {
    match generated {
        Ok(Value::Object(schema)) => schema,
        Ok(other) => {
            log::error!("Schema for {args_type} is not an object: {other}");
            bare_object_schema()
        }
        Err(e) => {
            log::error!("Failed to serialize schema for {args_type}: {e}");
            bare_object_schema()
        }
    }
}

fn bare_object_schema() -> JsonObject {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), json!("object"));
    schema
}
