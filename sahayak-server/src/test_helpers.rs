//! Test helpers for sahayak-server unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use sahayak_core::provider::ProviderContent;
use sahayak_core::{ModelInvoker, Orchestrator, ProviderRequest, ProviderResponse};
use sahayak_types::{ClassifiedError, ModelSettings};

use crate::router::build_router;
use crate::state::AppState;

pub enum Canned {
    Respond(Result<ProviderResponse, ClassifiedError>),
    Panic(&'static str),
}

/// Invoker that replays canned answers and counts calls.
#[derive(Default)]
pub struct StubInvoker {
    answers: Mutex<VecDeque<Canned>>,
    calls: Mutex<usize>,
}

impl StubInvoker {
    pub fn new(answers: Vec<Canned>) -> Arc<Self> {
        Arc::new(Self { answers: Mutex::new(answers.into()), calls: Mutex::new(0) })
    }

    pub fn text(text: &str) -> Canned {
        Canned::Respond(Ok(ProviderResponse::Success(ProviderContent::text(text))))
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("calls lock")
    }
}

#[async_trait]
impl ModelInvoker for StubInvoker {
    async fn invoke(&self, _request: &ProviderRequest) -> Result<ProviderResponse, ClassifiedError> {
        *self.calls.lock().expect("calls lock") += 1;
        let next = self.answers.lock().expect("answers lock").pop_front();
        match next {
            Some(Canned::Respond(answer)) => answer,
            Some(Canned::Panic(message)) => panic!("{}", message),
            None => panic!("unexpected provider call"),
        }
    }
}

/// Full router (CORS, body limit, tracing) over a stub invoker.
pub fn test_server(invoker: Arc<StubInvoker>) -> TestServer {
    let state = AppState::new(Orchestrator::new(invoker, ModelSettings::default()));
    TestServer::new(build_router(state, 32 * 1024 * 1024)).expect("failed to start test server")
}
