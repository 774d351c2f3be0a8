use sahayak_types::models::{VisualAidRequest, VisualAidResult};
use sahayak_types::{ClassifiedError, UseCase};
use tracing::Instrument;

use super::{request_span, Orchestrator};
use crate::classify::classify_output;
use crate::extract::extract_image;

impl Orchestrator {
    /// Blackboard-style diagram. Falls back to the model's text description
    /// when no image comes back.
    pub async fn create_visual_aid(&self, req: &VisualAidRequest) -> Result<VisualAidResult, ClassifiedError> {
        let use_case = UseCase::VisualAidCreator;
        async {
            let request = self.prompts().visual_aid(req);
            tracing::info!(model = request.model(), "Generating visual aid");
            let content = self.call(&request, use_case.failure_phrase()).await?;

            if let Some(image) = extract_image(&content) {
                return Ok(VisualAidResult::image(image.into_string()));
            }
            match content.joined_text() {
                Some(text) => {
                    tracing::info!("No image in response, returning description");
                    Ok(VisualAidResult::description_only(text))
                },
                None => Err(classify_output("response contained neither an image nor text")),
            }
        }
        .instrument(request_span(use_case))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{gemini_text, orchestrator, ScriptedInvoker};
    use crate::provider::{ProviderContent, ProviderResponse, ResponsePart};
    use sahayak_types::models::VisualAidRequest;
    use sahayak_types::ErrorKind;
    use serde_json::json;

    fn request() -> VisualAidRequest {
        VisualAidRequest { description: "Parts of a flower".into() }
    }

    #[tokio::test]
    async fn test_inline_image_becomes_data_uri() {
        let invoker = ScriptedInvoker::new(vec![Ok(ProviderResponse::Success(ProviderContent::new(vec![
            ResponsePart::Text("Here you go".into()),
            ResponsePart::InlineImage { mime_type: "image/png".into(), data: "iVBORw0KGgo=".into() },
        ])))]);
        let result = orchestrator(&invoker).create_visual_aid(&request()).await.expect("visual aid");
        assert_eq!(
            serde_json::to_value(&result).expect("json"),
            json!({"imageUrl": "data:image/png;base64,iVBORw0KGgo="})
        );
    }

    #[tokio::test]
    async fn test_text_only_answer_is_described() {
        let invoker = ScriptedInvoker::new(vec![gemini_text("Draw a circle with five petals around it.")]);
        let result = orchestrator(&invoker).create_visual_aid(&request()).await.expect("visual aid");
        assert_eq!(
            serde_json::to_value(&result).expect("json"),
            json!({
                "imageUrl": null,
                "description": "Draw a circle with five petals around it.",
                "message": "no image produced"
            })
        );
    }

    #[tokio::test]
    async fn test_empty_answer_is_malformed() {
        let invoker = ScriptedInvoker::new(vec![Ok(ProviderResponse::Success(ProviderContent::default()))]);
        let err = orchestrator(&invoker).create_visual_aid(&request()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedUpstreamOutput);
    }
}
