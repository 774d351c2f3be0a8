//! The seven orchestration use cases and the provider each one targets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider profile family a request is sent to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI-compatible chat completions gateway.
    Gateway,
    /// Google Gemini `generateContent`.
    Gemini,
}

impl ProviderKind {
    /// Environment variable that carries this provider's API key.
    pub fn credential_var(self) -> &'static str {
        match self {
            Self::Gateway => "SAHAYAK_GATEWAY_API_KEY",
            Self::Gemini => "SAHAYAK_GEMINI_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gateway => f.write_str("gateway"),
            Self::Gemini => f.write_str("gemini"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum UseCase {
    ContentGenerator,
    GameGenerator,
    QuickExplainer,
    LessonPlanner,
    WorksheetDifferentiator,
    VisualAidCreator,
    ReadingAssessment,
}

impl UseCase {
    pub const ALL: [UseCase; 7] = [
        Self::ContentGenerator,
        Self::GameGenerator,
        Self::QuickExplainer,
        Self::LessonPlanner,
        Self::WorksheetDifferentiator,
        Self::VisualAidCreator,
        Self::ReadingAssessment,
    ];

    /// Endpoint slug, e.g. `game-generator`.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::ContentGenerator => "content-generator",
            Self::GameGenerator => "game-generator",
            Self::QuickExplainer => "quick-explainer",
            Self::LessonPlanner => "lesson-planner",
            Self::WorksheetDifferentiator => "worksheet-differentiator",
            Self::VisualAidCreator => "visual-aid-creator",
            Self::ReadingAssessment => "reading-assessment",
        }
    }

    pub fn provider(self) -> ProviderKind {
        match self {
            Self::ContentGenerator
            | Self::GameGenerator
            | Self::QuickExplainer
            | Self::ReadingAssessment => ProviderKind::Gateway,
            Self::LessonPlanner | Self::WorksheetDifferentiator | Self::VisualAidCreator => {
                ProviderKind::Gemini
            },
        }
    }

    /// Generic message used when a failed provider response carries no
    /// message of its own.
    pub fn failure_phrase(self) -> &'static str {
        match self {
            Self::ContentGenerator => "Failed to generate content",
            Self::GameGenerator => "Failed to generate game",
            Self::QuickExplainer => "Failed to generate explanation",
            Self::LessonPlanner => "Failed to generate lesson plan",
            Self::WorksheetDifferentiator => "Failed to analyze textbook page",
            Self::VisualAidCreator => "Failed to generate visual aid",
            Self::ReadingAssessment => "Failed to analyze reading",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}
