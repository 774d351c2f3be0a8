//! Two-call reading assessment: transcribe the recording, then compare the
//! transcription with the expected text.

use sahayak_types::models::{ReadingAssessmentRequest, ReadingAssessmentResult, ReadingReport};
use sahayak_types::{ClassifiedError, UseCase};
use tracing::Instrument;

use super::{request_span, Orchestrator};

pub const TRANSCRIPTION_FAILURE: &str = "Failed to transcribe audio";

const REQUIRED: &[&str] = &["fluency_score", "accuracy_analysis", "overall_feedback"];

/// Pipeline state. The analysis request can only be built from
/// `AwaitingAnalysis`, so a failed transcription never reaches the second call.
#[derive(Debug)]
pub enum ReadingStage {
    AwaitingTranscription,
    AwaitingAnalysis { transcription: String },
    Done(ReadingAssessmentResult),
    Failed(ClassifiedError),
}

impl Orchestrator {
    pub async fn assess_reading(
        &self,
        req: &ReadingAssessmentRequest,
    ) -> Result<ReadingAssessmentResult, ClassifiedError> {
        async {
            let mut stage = ReadingStage::AwaitingTranscription;
            loop {
                stage = match stage {
                    ReadingStage::AwaitingTranscription => match self.transcribe(req).await {
                        Ok(transcription) => ReadingStage::AwaitingAnalysis { transcription },
                        Err(e) => ReadingStage::Failed(e),
                    },
                    ReadingStage::AwaitingAnalysis { transcription } => {
                        match self.analyze_reading(&req.expected_text, &transcription).await {
                            Ok(report) => ReadingStage::Done(ReadingAssessmentResult { transcription, report }),
                            Err(e) => ReadingStage::Failed(e),
                        }
                    },
                    ReadingStage::Done(result) => return Ok(result),
                    ReadingStage::Failed(e) => return Err(e),
                };
            }
        }
        .instrument(request_span(UseCase::ReadingAssessment))
        .await
    }

    async fn transcribe(&self, req: &ReadingAssessmentRequest) -> Result<String, ClassifiedError> {
        let request = self.prompts().transcription(req)?;
        tracing::info!("Transcribing reading");
        let text = self.complete_text(&request, TRANSCRIPTION_FAILURE).await?;
        Ok(text.trim().to_string())
    }

    async fn analyze_reading(&self, expected_text: &str, transcription: &str) -> Result<ReadingReport, ClassifiedError> {
        let request = self.prompts().reading_analysis(expected_text, transcription);
        tracing::info!(transcription_len = transcription.len(), "Analyzing reading");
        self.complete_structured(UseCase::ReadingAssessment, &request, REQUIRED).await
    }
}
