//! Typed error definitions for Sahayak.
//!
//! Every failure inside the orchestration pipeline ends up as a
//! [`ClassifiedError`]. The `Display` text is the user-facing message and is
//! rendered verbatim by clients, so quota and rate-limit variants carry
//! actionable guidance in plain text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback message when nothing more specific is known.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Classified failure of one orchestration request.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ClassifiedError {
    /// Provider credential is not configured. Raised before any network call.
    #[error("{variable} not configured")]
    MissingCredentials { variable: String },

    /// Provider reported exhausted credits (HTTP 402).
    #[error(
        "AI credits exhausted. Please add credits to your workspace in Settings → Workspace → Usage."
    )]
    QuotaExhausted,

    /// Provider rate limit hit (HTTP 429).
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    /// Provider answered 2xx but did not honor the requested output format.
    #[error("AI response was not in the expected format: {detail}")]
    MalformedUpstreamOutput { detail: String },

    /// Any other non-2xx provider answer.
    #[error("{message}")]
    UpstreamError { status: u16, message: String },

    /// Catch-all (transport failures, panics, invalid inline payloads).
    #[error("{message}")]
    Unknown { message: String },
}

/// Stable, machine-readable discriminant of a [`ClassifiedError`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingCredentials,
    QuotaExhausted,
    RateLimited,
    MalformedUpstreamOutput,
    UpstreamError,
    Unknown,
}

impl ClassifiedError {
    pub fn missing_credentials(variable: impl Into<String>) -> Self {
        Self::MissingCredentials { variable: variable.into() }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedUpstreamOutput { detail: detail.into() }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::Unknown { message: UNKNOWN_ERROR_MESSAGE.to_string() };
        }
        Self::Unknown { message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredentials { .. } => ErrorKind::MissingCredentials,
            Self::QuotaExhausted => ErrorKind::QuotaExhausted,
            Self::RateLimited => ErrorKind::RateLimited,
            Self::MalformedUpstreamOutput { .. } => ErrorKind::MalformedUpstreamOutput,
            Self::UpstreamError { .. } => ErrorKind::UpstreamError,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// HTTP status reported by the provider, for errors that came from one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::QuotaExhausted => Some(402),
            Self::RateLimited => Some(429),
            Self::UpstreamError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
