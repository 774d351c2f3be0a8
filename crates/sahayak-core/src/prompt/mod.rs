//! Prompt builder.
//!
//! Turns a validated use-case request into a [`ProviderRequest`]. Building is
//! deterministic: the same request and model settings always yield the same
//! provider request. Field presence is checked at the HTTP boundary, so the
//! only failure here is an inline payload that is not valid base64.

pub mod templates;

use sahayak_types::models::{
    ContentRequest, ExplanationRequest, GameRequest, LessonPlanRequest, ReadingAssessmentRequest,
    VisualAidRequest, WorksheetRequest,
};
use sahayak_types::{ClassifiedError, ModelSettings, UseCase};

use crate::extract::decode_inline_payload;
use crate::provider::{GenerationOptions, MessagePart, OutputModality, ProviderRequest};

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";
pub const DEFAULT_AUDIO_MIME: &str = "audio/webm";

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    models: ModelSettings,
}

impl PromptBuilder {
    pub fn new(models: ModelSettings) -> Self {
        Self { models }
    }

    pub fn models(&self) -> &ModelSettings {
        &self.models
    }

    fn text_request(&self, use_case: UseCase, prompt: String) -> ProviderRequest {
        let provider = use_case.provider();
        ProviderRequest::new(provider, self.models.model_for(provider), vec![MessagePart::Text(prompt)])
    }

    pub fn content(&self, req: &ContentRequest) -> ProviderRequest {
        self.text_request(UseCase::ContentGenerator, templates::content(&req.prompt, &req.language))
    }

    pub fn game(&self, req: &GameRequest) -> ProviderRequest {
        self.text_request(UseCase::GameGenerator, templates::game(&req.topic, &req.grade_level, req.game_type))
    }

    pub fn explanation(&self, req: &ExplanationRequest) -> ProviderRequest {
        self.text_request(UseCase::QuickExplainer, templates::explanation(&req.question, &req.language))
    }

    pub fn lesson_plan(&self, req: &LessonPlanRequest) -> ProviderRequest {
        self.text_request(
            UseCase::LessonPlanner,
            templates::lesson_plan(&req.subject, &req.grades, &req.topics),
        )
        .with_options(GenerationOptions {
            temperature: Some(0.7),
            max_output_tokens: Some(2048),
            ..Default::default()
        })
    }

    pub fn worksheet(&self, req: &WorksheetRequest) -> Result<ProviderRequest, ClassifiedError> {
        let image = decode_inline(&req.image_base64, DEFAULT_IMAGE_MIME, "imageBase64")?;
        let provider = UseCase::WorksheetDifferentiator.provider();
        Ok(ProviderRequest::new(
            provider,
            self.models.model_for(provider),
            vec![MessagePart::Text(templates::worksheet()), image],
        )
        .with_options(GenerationOptions {
            temperature: Some(0.5),
            max_output_tokens: Some(2048),
            ..Default::default()
        }))
    }

    /// Visual aids use the dedicated model override when one is configured.
    pub fn visual_aid(&self, req: &VisualAidRequest) -> ProviderRequest {
        ProviderRequest::new(
            UseCase::VisualAidCreator.provider(),
            self.models.visual_aid_model(),
            vec![MessagePart::Text(templates::visual_aid(&req.description))],
        )
        .with_options(GenerationOptions {
            temperature: Some(0.4),
            modalities: vec![OutputModality::Text, OutputModality::Image],
            ..Default::default()
        })
    }

    /// First reading-assessment call: audio in, plain transcription out.
    pub fn transcription(&self, req: &ReadingAssessmentRequest) -> Result<ProviderRequest, ClassifiedError> {
        let default_mime = req
            .mime_type
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_AUDIO_MIME);
        let audio = decode_inline(&req.audio, default_mime, "audio")?;
        let provider = UseCase::ReadingAssessment.provider();
        Ok(ProviderRequest::new(
            provider,
            self.models.model_for(provider),
            vec![MessagePart::Text(templates::TRANSCRIPTION.to_string()), audio],
        ))
    }

    /// Second reading-assessment call, built only from a successful transcription.
    pub fn reading_analysis(&self, expected_text: &str, transcription: &str) -> ProviderRequest {
        self.text_request(
            UseCase::ReadingAssessment,
            templates::reading_analysis(expected_text, transcription),
        )
    }
}

fn decode_inline(raw: &str, default_mime: &str, field: &str) -> Result<MessagePart, ClassifiedError> {
    let (mime_type, data) = decode_inline_payload(raw, default_mime)
        .map_err(|e| ClassifiedError::unknown(format!("`{}` is not valid base64: {}", field, e)))?;
    Ok(MessagePart::InlineData { mime_type, data })
}
