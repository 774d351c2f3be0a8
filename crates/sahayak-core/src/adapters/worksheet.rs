use sahayak_types::models::{WorksheetRequest, WorksheetResult, WorksheetSet};
use sahayak_types::{ClassifiedError, UseCase};
use tracing::Instrument;

use super::{request_span, Orchestrator};

impl Orchestrator {
    /// Three differentiated worksheets from a photographed textbook page.
    pub async fn differentiate_worksheet(&self, req: &WorksheetRequest) -> Result<WorksheetResult, ClassifiedError> {
        let use_case = UseCase::WorksheetDifferentiator;
        async {
            let request = self.prompts().worksheet(req)?;
            tracing::info!("Analyzing textbook page");
            let set: WorksheetSet = self.complete_structured(use_case, &request, &["worksheets"]).await?;
            Ok(WorksheetResult { worksheets: set.worksheets })
        }
        .instrument(request_span(use_case))
        .await
    }
}
