//! Structured parser: strict JSON parse plus required-key presence check.

use sahayak_types::ClassifiedError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::classify::classify_output;
use crate::extract::ExtractedPayload;

/// Parse `payload` as a JSON object and check `required` top-level keys.
///
/// A key holding `null` counts as missing. Nothing is defaulted: any failure
/// is `MalformedUpstreamOutput` and no partial value escapes.
pub fn parse_structured<T: DeserializeOwned>(
    payload: &ExtractedPayload,
    required: &[&str],
) -> Result<T, ClassifiedError> {
    let object = parse_object(payload.as_str(), required)?;
    serde_json::from_value(Value::Object(object)).map_err(classify_output)
}

/// Parse and key-check without committing to a typed shape.
pub fn parse_object(text: &str, required: &[&str]) -> Result<Map<String, Value>, ClassifiedError> {
    let value: Value = serde_json::from_str(text).map_err(|e| classify_output(format!("invalid JSON ({})", e)))?;

    let Value::Object(object) = value else {
        return Err(classify_output("expected a JSON object"));
    };

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|key| object.get(*key).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(classify_output(format!("missing required field(s): {}", missing.join(", "))));
    }

    Ok(object)
}
