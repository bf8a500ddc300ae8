//! studentgen-providers: Text-generation provider integrations.
//!
//! Implements the `TextGenerator` trait for Google Gemini and
//! OpenAI-compatible chat APIs, plus a canned mock for tests and offline use.

pub mod config;
pub mod error;
pub mod gemini;
pub mod mock;
pub mod openai;

pub use config::{create_provider, load_config, load_config_from, ProviderConfig, StudentgenConfig};
pub use error::{classify_status, ProviderError};
