//! Inbound request bodies, one per use case.
//!
//! Field names follow the browser client (camelCase). Validation only checks
//! that required fields are present and non-blank.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

fn default_language() -> String {
    "english".to_string()
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Render validation failures as `"`topic` is required, `gradeLevel` is required"`.
pub fn describe_validation(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> =
        errors.field_errors().keys().map(|field| to_camel_case(field)).collect();
    fields.sort();
    fields.iter().map(|f| format!("`{}` is required", f)).collect::<Vec<_>>().join(", ")
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    #[validate(custom(function = "not_blank"))]
    pub prompt: String,
    #[serde(default = "default_language")]
    #[validate(custom(function = "not_blank"))]
    pub language: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    #[default]
    Quiz,
    Matching,
    WordSearch,
    FillBlanks,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    #[validate(custom(function = "not_blank"))]
    pub topic: String,
    #[validate(custom(function = "not_blank"))]
    pub grade_level: String,
    #[serde(default)]
    pub game_type: GameType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationRequest {
    #[validate(custom(function = "not_blank"))]
    pub question: String,
    #[serde(default = "default_language")]
    #[validate(custom(function = "not_blank"))]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanRequest {
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub grades: String,
    #[validate(custom(function = "not_blank"))]
    pub topics: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetRequest {
    /// Photo of a textbook page, raw base64 or a `data:` URL.
    #[validate(custom(function = "not_blank"))]
    pub image_base64: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VisualAidRequest {
    #[validate(custom(function = "not_blank"))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReadingAssessmentRequest {
    /// Recorded reading, raw base64 or a `data:` URL.
    #[validate(custom(function = "not_blank"))]
    pub audio: String,
    #[validate(custom(function = "not_blank"))]
    pub expected_text: String,
    /// MIME type of `audio` when it is raw base64. Browsers record `audio/webm`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}
