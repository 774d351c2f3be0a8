//! Provider-neutral request/response model and the model invoker.
//!
//! A [`ProviderRequest`] is built once by the prompt builder and handed to a
//! [`ModelInvoker`]; the [`profile`] module translates it to and from the
//! wire format of whichever provider it targets.

pub mod invoker;
pub mod profile;

pub use invoker::{HttpInvoker, ModelInvoker};
pub use profile::{DecodeError, ProviderProfile};

use sahayak_types::ProviderKind;
use serde_json::Value;

/// One part of the single user message sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePart {
    Text(String),
    /// Decoded binary payload (image, audio) with its MIME type.
    InlineData { mime_type: String, data: Vec<u8> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputModality {
    Text,
    Image,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOptions {
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
    /// Empty means provider default (text only).
    pub modalities: Vec<OutputModality>,
}

impl GenerationOptions {
    pub fn is_default(&self) -> bool {
        self.temperature.is_none() && self.max_output_tokens.is_none() && self.modalities.is_empty()
    }
}

/// Fully-built outbound request. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    provider: ProviderKind,
    model: String,
    parts: Vec<MessagePart>,
    options: GenerationOptions,
}

impl ProviderRequest {
    pub fn new(provider: ProviderKind, model: impl Into<String>, parts: Vec<MessagePart>) -> Self {
        Self { provider, model: model.into(), parts, options: GenerationOptions::default() }
    }

    pub fn with_options(self, options: GenerationOptions) -> Self {
        Self { options, ..self }
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn parts(&self) -> &[MessagePart] {
        &self.parts
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Concatenated text parts, mostly useful for logging and tests.
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                MessagePart::Text(t) => Some(t.as_str()),
                MessagePart::InlineData { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Content part of a successful provider answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    Text(String),
    /// Base64 image data returned inline.
    InlineImage { mime_type: String, data: String },
    /// Message-level image reference (data URI or URL).
    ImageReference(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderContent {
    parts: Vec<ResponsePart>,
}

impl ProviderContent {
    pub fn new(parts: Vec<ResponsePart>) -> Self {
        Self { parts }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self { parts: vec![ResponsePart::Text(text.into())] }
    }

    pub fn parts(&self) -> &[ResponsePart] {
        &self.parts
    }

    /// All text parts joined in order, or `None` when the answer had no text.
    pub fn joined_text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .parts
            .iter()
            .filter_map(|p| match p {
                ResponsePart::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        if texts.is_empty() {
            return None;
        }
        Some(texts.concat())
    }
}

/// Outcome of one provider call that reached the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse {
    Success(ProviderContent),
    /// Non-2xx answer. `body` is the parsed JSON error body, or the raw text
    /// as a JSON string when it was not JSON.
    Failure { status: u16, body: Value },
}
