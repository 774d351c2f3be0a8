//! Payload extraction from raw model output.
//!
//! Models are asked for bare JSON but often wrap it in a markdown fence or add
//! prose around it. Extraction is a single first-match heuristic:
//!
//! 1. a ```` ```json ```` fence: everything up to the next ```` ``` ```` (or the
//!    end of the text when never closed), trimmed;
//! 2. otherwise the first generic fence pair, minus its info string, trimmed;
//! 3. otherwise the whole text, verbatim.

use base64::Engine as _;

use crate::provider::{ProviderContent, ResponsePart};

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Payload located in a provider answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedPayload {
    /// Unfenced text, exactly as returned.
    Text(String),
    /// Interior of the first fenced block.
    Fenced(String),
    /// `data:<mime>;base64,<data>` URI (or a provider-hosted image URL).
    Image(String),
}

impl ExtractedPayload {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Fenced(s) | Self::Image(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Text(s) | Self::Fenced(s) | Self::Image(s) => s,
        }
    }
}

/// Locate the text payload in `raw`.
pub fn extract_payload(raw: &str) -> ExtractedPayload {
    match fenced_interior(raw) {
        Some(interior) => ExtractedPayload::Fenced(interior.to_string()),
        None => ExtractedPayload::Text(raw.to_string()),
    }
}

/// Interior of the first fenced block, or `None` when `raw` has no fence.
pub fn fenced_interior(raw: &str) -> Option<&str> {
    if let Some(start) = raw.find(JSON_FENCE) {
        let rest = &raw[start + JSON_FENCE.len()..];
        // ```jsonc / ```json5 are other tags; let the generic path strip them.
        if !rest.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return Some(up_to_closing_fence(rest).trim());
        }
    }

    let start = raw.find(FENCE)?;
    let rest = &raw[start + FENCE.len()..];
    Some(strip_info_string(up_to_closing_fence(rest)).trim())
}

fn up_to_closing_fence(rest: &str) -> &str {
    rest.find(FENCE).map_or(rest, |end| &rest[..end])
}

/// Drop a language tag such as `JSON` or `javascript` from the opening line.
fn strip_info_string(interior: &str) -> &str {
    match interior.split_once('\n') {
        Some((first, body))
            if !first.trim().is_empty()
                && first
                    .trim()
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.')) =>
        {
            body
        },
        _ => interior,
    }
}

/// First image in the answer, as a data URI.
///
/// Inline images are re-encoded as `data:<mime>;base64,<data>`; message-level
/// references are returned as given. `None` is not an error: the caller falls
/// back to the accompanying text.
pub fn extract_image(content: &ProviderContent) -> Option<ExtractedPayload> {
    content.parts().iter().find_map(|part| match part {
        ResponsePart::InlineImage { mime_type, data } if !data.is_empty() => {
            Some(ExtractedPayload::Image(format!("data:{};base64,{}", mime_type, data)))
        },
        ResponsePart::ImageReference(url) if !url.is_empty() => Some(ExtractedPayload::Image(url.clone())),
        _ => None,
    })
}

/// Split an optional `data:<mime>;base64,` prefix off an inbound payload and
/// decode it. Returns the MIME type from the prefix, or `default_mime`.
pub fn decode_inline_payload(raw: &str, default_mime: &str) -> Result<(String, Vec<u8>), base64::DecodeError> {
    let (mime_type, encoded) = match raw.split_once("base64,") {
        Some((prefix, data)) => {
            let mime = prefix
                .trim()
                .strip_prefix("data:")
                .and_then(|p| p.split(';').next())
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(default_mime);
            (mime.to_string(), data)
        },
        None => (default_mime.to_string(), raw),
    };

    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD.decode(compact.as_bytes())?;
    Ok((mime_type, bytes))
}
