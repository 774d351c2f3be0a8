//! Use-case adapters.
//!
//! Every adapter is the same fixed pipeline: build prompt, invoke model,
//! extract payload, parse when structured. The first failing stage is
//! classified and returned; nothing is defaulted and nothing is retried.
//! Classified failures are logged once, by the caller that reports them.

mod content;
mod explanation;
mod game;
mod lesson_plan;
mod reading_assessment;
mod visual_aid;
mod worksheet;

#[cfg(test)]
pub(crate) mod test_support;

pub use reading_assessment::ReadingStage;

use std::sync::Arc;

use sahayak_types::{ClassifiedError, ModelSettings, UseCase};
use serde::de::DeserializeOwned;
use tracing::Span;

use crate::classify::{classify_failure, classify_output};
use crate::extract::extract_payload;
use crate::parse::parse_structured;
use crate::prompt::PromptBuilder;
use crate::provider::{ModelInvoker, ProviderContent, ProviderRequest, ProviderResponse};

/// Entry point for all seven use cases. Cheap to clone; holds no per-request
/// state.
#[derive(Clone)]
pub struct Orchestrator {
    invoker: Arc<dyn ModelInvoker>,
    prompts: Arc<PromptBuilder>,
}

impl Orchestrator {
    pub fn new(invoker: Arc<dyn ModelInvoker>, models: ModelSettings) -> Self {
        Self { invoker, prompts: Arc::new(PromptBuilder::new(models)) }
    }

    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    /// One provider call. Non-2xx answers are classified with `fallback` as
    /// the message of last resort.
    async fn call(&self, request: &ProviderRequest, fallback: &str) -> Result<ProviderContent, ClassifiedError> {
        match self.invoker.invoke(request).await? {
            ProviderResponse::Success(content) => Ok(content),
            ProviderResponse::Failure { status, body } => Err(classify_failure(status, &body, fallback)),
        }
    }

    /// Text of a successful answer. An answer with no text at all is malformed.
    async fn complete_text(&self, request: &ProviderRequest, fallback: &str) -> Result<String, ClassifiedError> {
        self.call(request, fallback)
            .await?
            .joined_text()
            .ok_or_else(|| classify_output("response contained no text"))
    }

    async fn complete_structured<T: DeserializeOwned>(
        &self,
        use_case: UseCase,
        request: &ProviderRequest,
        required: &[&str],
    ) -> Result<T, ClassifiedError> {
        let raw = self.complete_text(request, use_case.failure_phrase()).await?;
        let payload = extract_payload(&raw);
        tracing::debug!(fenced = matches!(payload, crate::extract::ExtractedPayload::Fenced(_)), "Extracted payload");
        parse_structured(&payload, required)
    }
}

/// Span wrapping one adapter run.
pub(crate) fn request_span(use_case: UseCase) -> Span {
    tracing::info_span!("orchestrate", use_case = %use_case, request_id = %uuid::Uuid::new_v4())
}
