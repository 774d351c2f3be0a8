use sahayak_types::models::{ExplanationRequest, ExplanationResult};
use sahayak_types::{ClassifiedError, UseCase};
use tracing::Instrument;

use super::{request_span, Orchestrator};

impl Orchestrator {
    pub async fn explain(&self, req: &ExplanationRequest) -> Result<ExplanationResult, ClassifiedError> {
        let use_case = UseCase::QuickExplainer;
        async {
            tracing::info!(language = %req.language, "Answering question");
            let request = self.prompts().explanation(req);
            let explanation = self.complete_text(&request, use_case.failure_phrase()).await?;
            Ok(ExplanationResult { explanation })
        }
        .instrument(request_span(use_case))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{gateway_text, orchestrator, ScriptedInvoker};
    use sahayak_types::models::ExplanationRequest;
    use sahayak_types::ErrorKind;
    use serde_json::json;

    fn question() -> ExplanationRequest {
        ExplanationRequest { question: "Why is the sky blue?".into(), language: "marathi".into() }
    }

    #[tokio::test]
    async fn test_explanation_text() {
        let invoker = ScriptedInvoker::new(vec![gateway_text("Sunlight scatters...")]);
        let result = orchestrator(&invoker).explain(&question()).await.expect("explain");
        assert_eq!(result.explanation, "Sunlight scatters...");
        assert!(invoker.requests()[0].prompt_text().contains("Why is the sky blue?"));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let invoker = ScriptedInvoker::failing(429, json!({"error": "slow down"}));
        let err = orchestrator(&invoker).explain(&question()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert_eq!(err.to_string(), "Too many requests. Please wait a moment and try again.");
    }

    #[tokio::test]
    async fn test_upstream_error_falls_back_to_phrase() {
        let invoker = ScriptedInvoker::failing(500, json!("Internal Server Error"));
        let err = orchestrator(&invoker).explain(&question()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate explanation");
        assert_eq!(err.upstream_status(), Some(500));
    }
}
