//! # Sahayak Core
//!
//! Orchestration core: every use case runs the same pipeline.
//!
//! ```text
//! request ─► prompt ─► provider ─► extract ─► parse ─► result
//!                         │           │         │
//!                         └───────────┴─────────┴──► classify ─► ClassifiedError
//! ```
//!
//! - `prompt/`    - per-use-case templates and the [`PromptBuilder`]
//! - `provider/`  - [`ModelInvoker`] trait, reqwest [`HttpInvoker`], wire profiles
//! - `extract.rs` - fenced-JSON and inline-image extraction
//! - `parse.rs`   - strict JSON parse with required-key check
//! - `classify.rs`- status/body → [`ClassifiedError`]
//! - `adapters/`  - the seven use cases on [`Orchestrator`]

pub mod adapters;
pub mod classify;
pub mod extract;
pub mod parse;
pub mod prompt;
pub mod provider;

pub use adapters::Orchestrator;
pub use prompt::PromptBuilder;
pub use provider::{HttpInvoker, ModelInvoker, ProviderRequest, ProviderResponse};
pub use sahayak_types::ClassifiedError;
