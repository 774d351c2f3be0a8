//! Protocol definitions for the generative-AI providers.
//!
//! - OpenAI-compatible chat completions (the AI gateway)
//! - Google Gemini `generateContent`

pub mod gemini;
pub mod openai;

pub use gemini::GeminiRole;
pub use openai::OpenAIRole;

use serde_json::Value;

/// Pull the provider's own error message out of a failure body.
///
/// Both providers use `{"error": {"message": ...}}`; some gateways answer
/// `{"error": "..."}` or a top-level `{"message": ...}` instead.
pub fn upstream_error_message(body: &Value) -> Option<String> {
    let candidate = match body.get("error") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(err) => err.get("message").and_then(Value::as_str),
        None => None,
    }
    .or_else(|| body.get("message").and_then(Value::as_str));

    candidate.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}
