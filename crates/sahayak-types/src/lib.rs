//! # Sahayak Types
//!
//! Foundational types for the Sahayak teaching-assistant service:
//!
//! - **`error`** - [`ClassifiedError`] taxonomy surfaced to clients
//! - **`models`** - use cases, request/result bodies, configuration
//! - **`protocol`** - OpenAI-compatible and Gemini wire types
//!
//! ```text
//!   sahayak-types (this crate)
//!          │
//!          ▼
//!     sahayak-core
//!          │
//!          ▼
//!    sahayak-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{ClassifiedError, ErrorKind};
pub use models::{AppConfig, ModelSettings, ProviderKind, ProvidersConfig, UseCase};
