use sahayak_types::models::{LessonPlan, LessonPlanRequest, LessonPlanResult};
use sahayak_types::{ClassifiedError, UseCase};
use tracing::Instrument;

use super::{request_span, Orchestrator};

impl Orchestrator {
    /// Monday-Friday plan for a multi-grade classroom.
    pub async fn plan_lessons(&self, req: &LessonPlanRequest) -> Result<LessonPlanResult, ClassifiedError> {
        let use_case = UseCase::LessonPlanner;
        async {
            tracing::info!(subject = %req.subject, grades = %req.grades, "Generating lesson plan");
            let request = self.prompts().lesson_plan(req);
            let lesson_plan: LessonPlan = self.complete_structured(use_case, &request, &["days"]).await?;
            Ok(LessonPlanResult { lesson_plan })
        }
        .instrument(request_span(use_case))
        .await
    }
}
