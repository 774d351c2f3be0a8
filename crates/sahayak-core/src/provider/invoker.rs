//! Outbound provider calls.

use async_trait::async_trait;
use reqwest::Client;
use sahayak_types::{ClassifiedError, ProviderKind, ProvidersConfig};
use serde_json::Value;

use super::{ProviderProfile, ProviderRequest, ProviderResponse};
use crate::classify;

/// Issues one provider call per [`ProviderRequest`].
///
/// Implementations make exactly one attempt: no retry, no backoff. A missing
/// credential must be reported as `MissingCredentials` without touching the
/// network.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke(&self, request: &ProviderRequest) -> Result<ProviderResponse, ClassifiedError>;
}

/// reqwest-backed invoker for both provider profiles.
pub struct HttpInvoker {
    http_client: Client,
    providers: ProvidersConfig,
}

impl HttpInvoker {
    /// Accepts a pre-built `reqwest::Client` so the transport (and its
    /// default timeout) is owned by the caller.
    pub fn new(http_client: Client, providers: ProvidersConfig) -> Self {
        Self { http_client, providers }
    }

    pub fn providers(&self) -> &ProvidersConfig {
        &self.providers
    }
}

/// The request body could not be serialized; nothing is sent.
fn encode_failure(kind: ProviderKind, err: &serde_json::Error) -> ClassifiedError {
    ClassifiedError::unknown(format!("Failed to encode {} request: {}", kind, err))
}

#[async_trait]
impl ModelInvoker for HttpInvoker {
    async fn invoke(&self, request: &ProviderRequest) -> Result<ProviderResponse, ClassifiedError> {
        let profile = ProviderProfile::for_kind(request.provider());
        let settings = self.providers.settings(profile.kind);

        let Some(api_key) = settings.credential() else {
            return Err(classify::missing_credentials(profile.kind));
        };

        let url = profile.endpoint(&settings.base_url, request.model());
        let body = profile.encode(request).map_err(|e| encode_failure(profile.kind, &e))?;
        tracing::debug!(
            provider = %profile.kind,
            model = request.model(),
            parts = request.parts().len(),
            "Sending provider request"
        );

        let response = profile
            .authorize(self.http_client.post(&url), api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClassifiedError::unknown(format!("Failed to reach {} provider: {}", profile.kind, e)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            ClassifiedError::unknown(format!("Failed to read {} response body: {}", profile.kind, e))
        })?;

        if !status.is_success() {
            tracing::warn!("{} API error {}: {}", profile.kind, status.as_u16(), text);
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Ok(ProviderResponse::Failure { status: status.as_u16(), body });
        }

        let content = profile.decode(&text).map_err(|e| ClassifiedError::malformed(e.to_string()))?;
        tracing::debug!(provider = %profile.kind, parts = content.parts().len(), "Provider call succeeded");

        Ok(ProviderResponse::Success(content))
    }
}
