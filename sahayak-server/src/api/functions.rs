use std::future::Future;
use std::panic::AssertUnwindSafe;

use axum::extract::State;
use axum::Json;
use futures::FutureExt;
use sahayak_core::classify::classify_panic;
use sahayak_types::models::{
    ContentRequest, ContentResult, ExplanationRequest, ExplanationResult, GameRequest, GameResult,
    LessonPlanRequest, LessonPlanResult, ReadingAssessmentRequest, ReadingAssessmentResult,
    VisualAidRequest, VisualAidResult, WorksheetRequest, WorksheetResult,
};
use sahayak_types::ClassifiedError;

use super::extract::ValidatedJson;
use super::ApiError;
use crate::state::AppState;

/// Runs one adapter; a panic inside it becomes `Unknown` instead of a dropped
/// connection.
async fn guarded<T>(run: impl Future<Output = Result<T, ClassifiedError>>) -> Result<Json<T>, ApiError> {
    let outcome = AssertUnwindSafe(run).catch_unwind().await.unwrap_or_else(|payload| Err(classify_panic(&*payload)));
    outcome.map(Json).map_err(ApiError::from)
}

pub async fn content_generator(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ContentRequest>,
) -> Result<Json<ContentResult>, ApiError> {
    guarded(state.orchestrator.generate_content(&req)).await
}

pub async fn game_generator(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<GameRequest>,
) -> Result<Json<GameResult>, ApiError> {
    guarded(state.orchestrator.generate_game(&req)).await
}

pub async fn quick_explainer(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ExplanationRequest>,
) -> Result<Json<ExplanationResult>, ApiError> {
    guarded(state.orchestrator.explain(&req)).await
}

pub async fn lesson_planner(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LessonPlanRequest>,
) -> Result<Json<LessonPlanResult>, ApiError> {
    guarded(state.orchestrator.plan_lessons(&req)).await
}

pub async fn worksheet_differentiator(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<WorksheetRequest>,
) -> Result<Json<WorksheetResult>, ApiError> {
    guarded(state.orchestrator.differentiate_worksheet(&req)).await
}

pub async fn visual_aid_creator(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<VisualAidRequest>,
) -> Result<Json<VisualAidResult>, ApiError> {
    guarded(state.orchestrator.create_visual_aid(&req)).await
}

pub async fn reading_assessment(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ReadingAssessmentRequest>,
) -> Result<Json<ReadingAssessmentResult>, ApiError> {
    guarded(state.orchestrator.assess_reading(&req)).await
}
