//! `/functions/v1/*` endpoints, one per use case.

mod error;
mod extract;
mod functions;

#[cfg(test)]
mod functions_tests;

pub use error::ApiError;

use axum::routing::post;
use axum::Router;
use sahayak_types::UseCase;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    UseCase::ALL.into_iter().fold(Router::new(), |router, use_case| {
        let path = format!("/{}", use_case.endpoint());
        let route = match use_case {
            UseCase::ContentGenerator => post(functions::content_generator),
            UseCase::GameGenerator => post(functions::game_generator),
            UseCase::QuickExplainer => post(functions::quick_explainer),
            UseCase::LessonPlanner => post(functions::lesson_planner),
            UseCase::WorksheetDifferentiator => post(functions::worksheet_differentiator),
            UseCase::VisualAidCreator => post(functions::visual_aid_creator),
            UseCase::ReadingAssessment => post(functions::reading_assessment),
        };
        router.route(&path, route)
    })
}
