//! Failure classification.
//!
//! Maps pre-call conditions, failed provider responses, output-format
//! problems and panics onto [`ClassifiedError`]. Classification only picks
//! the message surfaced to the client; nothing here retries.

use std::any::Any;

use sahayak_types::error::UNKNOWN_ERROR_MESSAGE;
use sahayak_types::protocol::upstream_error_message;
use sahayak_types::{ClassifiedError, ProviderKind};
use serde_json::Value;

/// No credential configured for `provider`.
pub fn missing_credentials(provider: ProviderKind) -> ClassifiedError {
    ClassifiedError::missing_credentials(provider.credential_var())
}

/// Non-2xx provider answer.
///
/// 402 and 429 are decided by status alone, whatever the body says. Any other
/// status carries the provider's own message when it has one, else `fallback`.
pub fn classify_failure(status: u16, body: &Value, fallback: &str) -> ClassifiedError {
    match status {
        402 => ClassifiedError::QuotaExhausted,
        429 => ClassifiedError::RateLimited,
        _ => ClassifiedError::UpstreamError {
            status,
            message: upstream_error_message(body).unwrap_or_else(|| fallback.to_string()),
        },
    }
}

/// A 2xx answer whose payload could not be used.
pub fn classify_output(detail: impl std::fmt::Display) -> ClassifiedError {
    ClassifiedError::malformed(detail.to_string())
}

/// Panic payload caught at the adapter boundary.
pub fn classify_panic(payload: &(dyn Any + Send)) -> ClassifiedError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
    ClassifiedError::unknown(message)
}
