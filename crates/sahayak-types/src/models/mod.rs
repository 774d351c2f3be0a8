//! Domain models: use cases, request/result bodies, configuration.

pub mod config;
pub mod requests;
pub mod results;
pub mod use_case;

pub use config::{AppConfig, ModelSettings, ProviderSettings, ProvidersConfig, ServerConfig};
pub use requests::{
    describe_validation, ContentRequest, ExplanationRequest, GameRequest, GameType,
    LessonPlanRequest, ReadingAssessmentRequest, VisualAidRequest, WorksheetRequest,
};
pub use results::{
    ContentResult, ExplanationResult, Game, GameResult, LessonPlan, LessonPlanResult,
    ReadingAssessmentResult, ReadingReport, VisualAidResult, WorksheetResult,
    WorksheetSet, NO_IMAGE_MESSAGE,
};
pub use use_case::{ProviderKind, UseCase};
