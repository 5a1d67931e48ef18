use serde_json::{json, Map, Value};

/// Key under which undecodable argument text is preserved
pub const RAW_ARGUMENTS_KEY: &str = "raw";

/// Decode a tool call's arguments into structured data.
///
/// Providers send arguments either as JSON encoded text or as an already decoded value.
/// Structured values pass through untouched, missing or empty payloads become an empty
/// object, and text that is not valid JSON is kept under [`RAW_ARGUMENTS_KEY`] so the
/// step can still be built.
pub fn decode_arguments(raw: &Value) -> Value {
    match raw {
        Value::Null => Value::Object(Map::new()),
        Value::String(text) if text.is_empty() => Value::Object(Map::new()),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::debug!("Could not interpret tool call arguments: {}", e);
                json!({ RAW_ARGUMENTS_KEY: text })
            }
        },
        structured => structured.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_encoded_object() {
        let raw = json!("{\"location\": \"San Francisco, CA\"}");
        assert_eq!(
            decode_arguments(&raw),
            json!({"location": "San Francisco, CA"})
        );
    }

    #[test]
    fn test_structured_arguments_pass_through() {
        let raw = json!({"to": "boss@example.com", "subject": "Summary"});
        assert_eq!(decode_arguments(&raw), raw);

        let raw = json!([1, 2, 3]);
        assert_eq!(decode_arguments(&raw), raw);
    }

    #[test]
    fn test_malformed_text_is_wrapped() {
        let raw = json!("{bad json");
        assert_eq!(decode_arguments(&raw), json!({"raw": "{bad json"}));
    }

    #[test]
    fn test_missing_or_empty_is_empty_object() {
        assert_eq!(decode_arguments(&Value::Null), json!({}));
        assert_eq!(decode_arguments(&json!("")), json!({}));
    }

    #[test]
    fn test_whitespace_only_text_is_wrapped() {
        assert_eq!(decode_arguments(&json!("   ")), json!({"raw": "   "}));
    }

    #[test]
    fn test_encoded_scalar_decodes() {
        assert_eq!(decode_arguments(&json!("42")), json!(42));
    }
}
