use sahayak_types::models::{ContentRequest, ContentResult};
use sahayak_types::{ClassifiedError, UseCase};
use tracing::Instrument;

use super::{request_span, Orchestrator};

impl Orchestrator {
    /// Free-text educational content in the requested language.
    pub async fn generate_content(&self, req: &ContentRequest) -> Result<ContentResult, ClassifiedError> {
        let use_case = UseCase::ContentGenerator;
        async {
            tracing::info!(language = %req.language, "Generating content");
            let request = self.prompts().content(req);
            let generated_text = self.complete_text(&request, use_case.failure_phrase()).await?;
            Ok(ContentResult { generated_text })
        }
        .instrument(request_span(use_case))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{gateway_text, orchestrator, ScriptedInvoker};
    use sahayak_types::models::ContentRequest;
    use sahayak_types::{ClassifiedError, ErrorKind};
    use serde_json::json;

    #[tokio::test]
    async fn test_hindi_content_passes_text_through() {
        let invoker = ScriptedInvoker::new(vec![gateway_text("सूर्य का प्रकाश...")]);
        let result = orchestrator(&invoker)
            .generate_content(&ContentRequest { prompt: "Explain photosynthesis".into(), language: "hindi".into() })
            .await
            .expect("content");

        assert_eq!(result.generated_text, "सूर्य का प्रकाश...");
        assert_eq!(serde_json::to_value(&result).expect("json"), json!({"generatedText": "सूर्य का प्रकाश..."}));
        let prompt = invoker.requests()[0].prompt_text();
        assert!(prompt.contains("hindi"));
        assert!(prompt.contains("Explain photosynthesis"));
    }

    #[tokio::test]
    async fn test_fenced_text_is_not_unwrapped() {
        let raw = "Try this:\n```\n2 + 2 = 4\n```";
        let invoker = ScriptedInvoker::new(vec![gateway_text(raw)]);
        let result = orchestrator(&invoker)
            .generate_content(&ContentRequest { prompt: "Addition".into(), language: "english".into() })
            .await
            .expect("content");
        assert_eq!(result.generated_text, raw);
    }

    #[tokio::test]
    async fn test_quota_exhausted() {
        let invoker = ScriptedInvoker::failing(402, json!({"error": {"message": "Payment required"}}));
        let err = orchestrator(&invoker)
            .generate_content(&ContentRequest { prompt: "x".into(), language: "english".into() })
            .await
            .unwrap_err();
        assert_eq!(err, ClassifiedError::QuotaExhausted);
        assert_eq!(err.kind(), ErrorKind::QuotaExhausted);
    }
}
