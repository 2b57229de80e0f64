//! JSON Schema for the configuration file.

use super::NetlockConfig;

/// Generates a JSON Schema for the configuration.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(NetlockConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!("netlock.schema.json"));
    }

    schema
}

/// Generates a pretty-printed JSON Schema string.
#[must_use]
pub fn generate_schema_json() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_schema_produces_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(&generate_schema_json()).unwrap();

        assert_eq!(parsed["$id"], "netlock.schema.json");
        assert_eq!(parsed["title"], "NetlockConfig");
        for section in ["title", "canvas", "schedule", "source", "installer"] {
            assert!(parsed["properties"][section].is_object(), "missing {section}");
        }
    }
}
