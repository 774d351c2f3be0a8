//! Service configuration.
//!
//! Nothing in this module reads the environment. The server binary resolves
//! CLI flags and env vars into these structs and injects them.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::use_case::ProviderKind;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

fn http_url(value: &str) -> Result<(), ValidationError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| ValidationError::new("url"))?;
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(ValidationError::new("url"));
    }
    Ok(())
}

/// Endpoint and credential for one provider profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ProviderSettings {
    #[validate(custom(function = "http_url"))]
    pub base_url: String,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl ProviderSettings {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self { base_url: base_url.into(), api_key }
    }

    /// Configured key, treating empty or whitespace-only values as absent.
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

/// Credentials and endpoints for both provider profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ProvidersConfig {
    #[validate(nested)]
    pub gateway: ProviderSettings,
    #[validate(nested)]
    pub gemini: ProviderSettings,
}

impl ProvidersConfig {
    pub fn settings(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::Gateway => &self.gateway,
            ProviderKind::Gemini => &self.gemini,
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            gateway: ProviderSettings::new(DEFAULT_GATEWAY_URL, None),
            gemini: ProviderSettings::new(DEFAULT_GEMINI_URL, None),
        }
    }
}

/// Model ids used by the prompt builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ModelSettings {
    #[validate(length(min = 1_u64))]
    pub gateway_model: String,
    #[validate(length(min = 1_u64))]
    pub gemini_model: String,
    /// Override for the visual-aid (image generation) use case.
    #[serde(default)]
    pub visual_aid_model: Option<String>,
}

impl ModelSettings {
    pub fn model_for(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::Gateway => &self.gateway_model,
            ProviderKind::Gemini => &self.gemini_model,
        }
    }

    pub fn visual_aid_model(&self) -> &str {
        self.visual_aid_model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.gemini_model)
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            gateway_model: DEFAULT_GATEWAY_MODEL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            visual_aid_model: None,
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ServerConfig {
    #[validate(length(min = 1_u64))]
    pub host: String,
    #[validate(range(min = 1_u16))]
    pub port: u16,
    /// Maximum request body size in bytes (base64 images and audio).
    #[validate(range(min = 1024_usize))]
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8045, body_limit: 32 * 1024 * 1024 }
    }
}

/// Full service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate, Default)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub providers: ProvidersConfig,
    #[validate(nested)]
    pub models: ModelSettings,
}
