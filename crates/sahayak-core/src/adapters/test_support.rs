//! Scripted invoker for adapter tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sahayak_types::{ClassifiedError, ModelSettings};
use serde_json::Value;

use super::Orchestrator;
use crate::provider::{ModelInvoker, ProviderContent, ProviderRequest, ProviderResponse};

type Scripted = Result<ProviderResponse, ClassifiedError>;

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub struct ScriptedInvoker {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl ScriptedInvoker {
    pub fn new(responses: Vec<Scripted>) -> Self {
        Self { responses: Arc::new(Mutex::new(responses.into())), requests: Arc::default() }
    }

    pub fn failing(status: u16, body: Value) -> Self {
        Self::new(vec![Ok(ProviderResponse::Failure { status, body })])
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelInvoker for ScriptedInvoker {
    async fn invoke(&self, request: &ProviderRequest) -> Result<ProviderResponse, ClassifiedError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected provider call #{}", self.call_count()))
    }
}

pub fn orchestrator(invoker: &ScriptedInvoker) -> Orchestrator {
    Orchestrator::new(Arc::new(invoker.clone()), ModelSettings::default())
}

pub fn gateway_text(text: &str) -> Scripted {
    Ok(ProviderResponse::Success(ProviderContent::text(text)))
}

/// Same shape as [`gateway_text`]; named for readability in Gemini-backed tests.
pub fn gemini_text(text: &str) -> Scripted {
    gateway_text(text)
}
