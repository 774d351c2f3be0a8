//! Normalized results returned to the client, one per use case.
//!
//! Structured results keep any keys the model adds beyond the required ones
//! (`extra`), so the client sees everything the model produced.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message attached to a visual aid that came back without an image.
pub const NO_IMAGE_MESSAGE: &str = "no image produced";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentResult {
    pub generated_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExplanationResult {
    pub explanation: String,
}

/// Educational game. Only key presence is checked; `content` is game-type
/// specific (questions, pairs, words...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub title: Value,
    pub instructions: Value,
    pub content: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResult {
    pub game: Game,
}

/// `days` must be an array; each day and every other key is passed through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LessonPlan {
    pub days: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanResult {
    pub lesson_plan: LessonPlan,
}

/// Shape the model is asked to produce for worksheet differentiation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorksheetSet {
    pub worksheets: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorksheetResult {
    pub worksheets: Vec<Value>,
}

/// Visual aid: either an image data URI, or a drawable text description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisualAidResult {
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VisualAidResult {
    pub fn image(data_uri: String) -> Self {
        Self { image_url: Some(data_uri), description: None, message: None }
    }

    pub fn description_only(description: String) -> Self {
        Self {
            image_url: None,
            description: Some(description),
            message: Some(NO_IMAGE_MESSAGE.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingReport {
    pub fluency_score: Value,
    pub accuracy_analysis: Value,
    pub overall_feedback: Value,
    /// `mistakes`, `suggestions` and anything else the model adds.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingAssessmentResult {
    pub transcription: String,
    pub report: ReadingReport,
}
