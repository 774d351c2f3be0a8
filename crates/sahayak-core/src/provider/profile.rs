//! Provider profiles: endpoint, auth header, wire encoding, and response
//! decoding for each provider family.
//!
//! The orchestration pipeline is written once; everything that differs
//! between the OpenAI-compatible gateway and Gemini lives here.

use base64::{engine::general_purpose, Engine as _};
use reqwest::RequestBuilder;
use sahayak_types::protocol::gemini::{
    GeminiContent, GeminiInlineData, GeminiPart, GeminiRole, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig,
};
use sahayak_types::protocol::openai::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ContentPart, ImageUrl, InputAudio,
    MessageContent, OpenAIRole,
};
use sahayak_types::ProviderKind;
use serde_json::Value;
use thiserror::Error;

use super::{MessagePart, OutputModality, ProviderContent, ProviderRequest, ResponsePart};

/// Why a 2xx provider body could not be turned into content parts.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("provider body is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("unexpected provider response shape: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("provider response contained no {0}")]
    Empty(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `x-goog-api-key: <key>`
    GoogApiKey,
}

/// Static description of one provider family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderProfile {
    pub kind: ProviderKind,
    pub auth: AuthScheme,
}

impl ProviderProfile {
    pub const GATEWAY: Self = Self { kind: ProviderKind::Gateway, auth: AuthScheme::Bearer };
    pub const GEMINI: Self = Self { kind: ProviderKind::Gemini, auth: AuthScheme::GoogApiKey };

    pub fn for_kind(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Gateway => Self::GATEWAY,
            ProviderKind::Gemini => Self::GEMINI,
        }
    }

    pub fn credential_var(&self) -> &'static str {
        self.kind.credential_var()
    }

    pub fn endpoint(&self, base_url: &str, model: &str) -> String {
        build_url(self.kind, base_url, model)
    }

    pub fn authorize(&self, builder: RequestBuilder, api_key: &str) -> RequestBuilder {
        match self.auth {
            AuthScheme::Bearer => builder.bearer_auth(api_key),
            AuthScheme::GoogApiKey => builder.header("x-goog-api-key", api_key),
        }
    }

    /// Wire body for `request`.
    pub fn encode(&self, request: &ProviderRequest) -> Result<Value, serde_json::Error> {
        match self.kind {
            ProviderKind::Gateway => serde_json::to_value(encode_chat_completion(request)),
            ProviderKind::Gemini => serde_json::to_value(encode_generate_content(request)),
        }
    }

    /// Content parts of a 2xx provider body.
    pub fn decode(&self, raw: &str) -> Result<ProviderContent, DecodeError> {
        let value: Value = serde_json::from_str(raw).map_err(DecodeError::NotJson)?;
        match self.kind {
            ProviderKind::Gateway => decode_chat_completion(value),
            ProviderKind::Gemini => decode_generate_content(value),
        }
    }
}

pub(crate) fn build_url(kind: ProviderKind, base_url: &str, model: &str) -> String {
    let base = base_url.trim_end_matches('/');
    match kind {
        ProviderKind::Gateway => format!("{}/v1/chat/completions", base),
        ProviderKind::Gemini => format!("{}/v1beta/models/{}:generateContent", base, model),
    }
}

fn data_uri(mime_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, general_purpose::STANDARD.encode(data))
}

/// `audio/webm;codecs=opus` → `webm`, `audio/mpeg` → `mp3`.
fn audio_format(mime_type: &str) -> String {
    let subtype = mime_type
        .split(';')
        .next()
        .and_then(|m| m.split('/').nth(1))
        .unwrap_or("wav")
        .trim()
        .to_ascii_lowercase();
    match subtype.as_str() {
        "mpeg" | "mp3" => "mp3".to_string(),
        "x-wav" | "wave" => "wav".to_string(),
        _ => subtype,
    }
}

fn encode_chat_completion(request: &ProviderRequest) -> ChatCompletionRequest {
    let content = match request.parts() {
        [MessagePart::Text(text)] => MessageContent::Text(text.clone()),
        parts => MessageContent::Parts(
            parts
                .iter()
                .map(|part| match part {
                    MessagePart::Text(text) => ContentPart::Text { text: text.clone() },
                    MessagePart::InlineData { mime_type, data } if mime_type.starts_with("audio/") => {
                        ContentPart::InputAudio {
                            input_audio: InputAudio {
                                data: general_purpose::STANDARD.encode(data),
                                format: audio_format(mime_type),
                            },
                        }
                    },
                    MessagePart::InlineData { mime_type, data } => ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_uri(mime_type, data) },
                    },
                })
                .collect(),
        ),
    };

    let options = request.options();
    let modalities = (!options.modalities.is_empty()).then(|| {
        options
            .modalities
            .iter()
            .map(|m| match m {
                OutputModality::Text => "text".to_string(),
                OutputModality::Image => "image".to_string(),
            })
            .collect()
    });

    ChatCompletionRequest {
        model: request.model().to_string(),
        messages: vec![ChatMessage { role: OpenAIRole::User, content }],
        temperature: options.temperature,
        max_tokens: options.max_output_tokens,
        modalities,
    }
}

fn encode_generate_content(request: &ProviderRequest) -> GenerateContentRequest {
    let parts = request
        .parts()
        .iter()
        .map(|part| match part {
            MessagePart::Text(text) => GeminiPart::Text { text: text.clone() },
            MessagePart::InlineData { mime_type, data } => GeminiPart::InlineData {
                inline_data: GeminiInlineData {
                    mime_type: mime_type.clone(),
                    data: general_purpose::STANDARD.encode(data),
                },
            },
        })
        .collect();

    let options = request.options();
    let generation_config = (!options.is_default()).then(|| GenerationConfig {
        temperature: options.temperature,
        max_output_tokens: options.max_output_tokens,
        response_modalities: (!options.modalities.is_empty()).then(|| {
            options
                .modalities
                .iter()
                .map(|m| match m {
                    OutputModality::Text => "TEXT".to_string(),
                    OutputModality::Image => "IMAGE".to_string(),
                })
                .collect()
        }),
    });

    GenerateContentRequest {
        contents: vec![GeminiContent { role: Some(GeminiRole::User), parts }],
        generation_config,
    }
}

fn decode_chat_completion(value: Value) -> Result<ProviderContent, DecodeError> {
    let response: ChatCompletionResponse = serde_json::from_value(value).map_err(DecodeError::Shape)?;
    let choice = response.choices.into_iter().next().ok_or(DecodeError::Empty("choices"))?;

    let mut parts = Vec::new();
    match choice.message.content {
        Some(MessageContent::Text(text)) => parts.push(ResponsePart::Text(text)),
        Some(MessageContent::Parts(content_parts)) => {
            parts.extend(content_parts.into_iter().filter_map(chat_part_to_response))
        },
        None => {},
    }
    parts.extend(choice.message.images.into_iter().filter_map(chat_part_to_response));

    Ok(ProviderContent::new(parts))
}

fn chat_part_to_response(part: ContentPart) -> Option<ResponsePart> {
    match part {
        ContentPart::Text { text } => Some(ResponsePart::Text(text)),
        ContentPart::ImageUrl { image_url } => Some(ResponsePart::ImageReference(image_url.url)),
        ContentPart::InputAudio { .. } | ContentPart::Unsupported => None,
    }
}

fn decode_generate_content(value: Value) -> Result<ProviderContent, DecodeError> {
    let response: GenerateContentResponse = serde_json::from_value(value).map_err(DecodeError::Shape)?;
    let candidate = response.candidates.into_iter().next().ok_or(DecodeError::Empty("candidates"))?;
    let content = candidate.content.ok_or(DecodeError::Empty("candidate content"))?;

    let parts = content
        .parts
        .into_iter()
        .filter_map(|part| match part {
            GeminiPart::Text { text } => Some(ResponsePart::Text(text)),
            GeminiPart::InlineData { inline_data } if inline_data.mime_type.starts_with("image/") => {
                Some(ResponsePart::InlineImage {
                    mime_type: inline_data.mime_type,
                    data: inline_data.data,
                })
            },
            GeminiPart::InlineData { .. } | GeminiPart::Other(_) => None,
        })
        .collect();

    Ok(ProviderContent::new(parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::GenerationOptions;
    use serde_json::json;

    #[test]
    fn test_build_url() {
        assert_eq!(
            build_url(ProviderKind::Gateway, "https://ai.gateway.lovable.dev/", "ignored"),
            "https://ai.gateway.lovable.dev/v1/chat/completions"
        );
        assert_eq!(
            build_url(ProviderKind::Gemini, "https://generativelanguage.googleapis.com", "gemini-2.0-flash-exp"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }

    #[test]
    fn test_gateway_single_text_part_is_plain_string() {
        let request = ProviderRequest::new(
            ProviderKind::Gateway,
            "google/gemini-2.5-flash",
            vec![MessagePart::Text("Hello".into())],
        );
        let body = ProviderProfile::GATEWAY.encode(&request).expect("encode");
        assert_eq!(
            body,
            json!({
                "model": "google/gemini-2.5-flash",
                "messages": [{"role": "user", "content": "Hello"}]
            })
        );
    }

    #[test]
    fn test_gateway_audio_part() {
        let request = ProviderRequest::new(
            ProviderKind::Gateway,
            "google/gemini-2.5-flash",
            vec![
                MessagePart::Text("Transcribe".into()),
                MessagePart::InlineData { mime_type: "audio/webm;codecs=opus".into(), data: b"abc".to_vec() },
            ],
        );
        let body = ProviderProfile::GATEWAY.encode(&request).expect("encode");
        let content = &body["messages"][0]["content"];
        assert_eq!(content[0], json!({"type": "text", "text": "Transcribe"}));
        assert_eq!(
            content[1],
            json!({"type": "input_audio", "input_audio": {"data": "YWJj", "format": "webm"}})
        );
    }

    #[test]
    fn test_gateway_image_part_becomes_data_uri() {
        let request = ProviderRequest::new(
            ProviderKind::Gateway,
            "m",
            vec![
                MessagePart::Text("Look".into()),
                MessagePart::InlineData { mime_type: "image/png".into(), data: b"abc".to_vec() },
            ],
        );
        let body = ProviderProfile::GATEWAY.encode(&request).expect("encode");
        assert_eq!(body["messages"][0]["content"][1]["image_url"]["url"], "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_gemini_encoding_with_options() {
        let request = ProviderRequest::new(
            ProviderKind::Gemini,
            "gemini-2.0-flash-exp",
            vec![
                MessagePart::Text("Analyze".into()),
                MessagePart::InlineData { mime_type: "image/jpeg".into(), data: b"abc".to_vec() },
            ],
        )
        .with_options(GenerationOptions {
            temperature: Some(0.4),
            max_output_tokens: None,
            modalities: vec![OutputModality::Text, OutputModality::Image],
        });
        let body = ProviderProfile::GEMINI.encode(&request).expect("encode");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Analyze");
        assert_eq!(body["contents"][0]["parts"][1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(body["contents"][0]["parts"][1]["inlineData"]["data"], "YWJj");
        assert_eq!(body["generationConfig"]["temperature"], 0.4);
        assert_eq!(body["generationConfig"]["responseModalities"], json!(["TEXT", "IMAGE"]));
    }

    #[test]
    fn test_gemini_without_options_omits_generation_config() {
        let request =
            ProviderRequest::new(ProviderKind::Gemini, "g", vec![MessagePart::Text("x".into())]);
        let body = ProviderProfile::GEMINI.encode(&request).expect("encode");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_decode_gateway_text() {
        let raw = json!({"choices": [{"message": {"content": "सूर्य का प्रकाश..."}}]}).to_string();
        let content = ProviderProfile::GATEWAY.decode(&raw).expect("decode");
        assert_eq!(content.joined_text().as_deref(), Some("सूर्य का प्रकाश..."));
    }

    #[test]
    fn test_decode_gateway_images() {
        let raw = json!({"choices": [{"message": {
            "content": "Here is the diagram",
            "images": [{"type": "image_url", "image_url": {"url": "data:image/png;base64,QUJD"}}]
        }}]})
        .to_string();
        let content = ProviderProfile::GATEWAY.decode(&raw).expect("decode");
        assert_eq!(
            content.parts()[1],
            ResponsePart::ImageReference("data:image/png;base64,QUJD".into())
        );
    }

    #[test]
    fn test_decode_gateway_without_choices_fails() {
        let err = ProviderProfile::GATEWAY.decode(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Empty("choices")));
        let err = ProviderProfile::GATEWAY.decode(r#"{"id": "x"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)));
        let err = ProviderProfile::GATEWAY.decode("<html>").unwrap_err();
        assert!(matches!(err, DecodeError::NotJson(_)));
    }

    #[test]
    fn test_decode_gemini_mixed_parts() {
        let raw = json!({"candidates": [{"content": {"parts": [
            {"text": "A leaf"},
            {"inlineData": {"mimeType": "image/png", "data": "iVBOR"}}
        ]}}]})
        .to_string();
        let content = ProviderProfile::GEMINI.decode(&raw).expect("decode");
        assert_eq!(
            content.parts(),
            &[
                ResponsePart::Text("A leaf".into()),
                ResponsePart::InlineImage { mime_type: "image/png".into(), data: "iVBOR".into() },
            ]
        );
    }

    #[test]
    fn test_decode_gemini_blocked_candidate() {
        let raw = json!({"candidates": [{"finishReason": "SAFETY"}]}).to_string();
        let err = ProviderProfile::GEMINI.decode(&raw).unwrap_err();
        assert!(matches!(err, DecodeError::Empty("candidate content")));
    }

    #[test]
    fn test_audio_format() {
        assert_eq!(audio_format("audio/mpeg"), "mp3");
        assert_eq!(audio_format("audio/wav"), "wav");
        assert_eq!(audio_format("audio/webm;codecs=opus"), "webm");
    }
}
