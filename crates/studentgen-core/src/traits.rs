//! Core trait definitions for text generators and record stores.
//!
//! These async traits are implemented by the `studentgen-providers` and
//! `studentgen-store` crates respectively.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{NewStudent, StudentRecord};

// ---------------------------------------------------------------------------
// Text generator trait
// ---------------------------------------------------------------------------

/// Trait for LLM backends that turn a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable provider name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Generate text from a prompt.
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse>;
}

/// Request to generate text from an LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier (e.g. "gemini-2.0-flash").
    pub model: String,
    /// The prompt.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Response from a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The raw generated text, trimmed.
    pub content: String,
    /// Model that actually generated the response.
    pub model: String,
    /// Latency in milliseconds.
    pub latency_ms: u64,
}

// ---------------------------------------------------------------------------
// Record store trait
// ---------------------------------------------------------------------------

/// Append-only storage for student records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a profile and return the id assigned to it.
    async fn insert(&self, student: &NewStudent) -> anyhow::Result<i64>;

    /// Every stored record, in insertion order.
    async fn fetch_all(&self) -> anyhow::Result<Vec<StudentRecord>>;

    /// Number of stored records.
    async fn count(&self) -> anyhow::Result<u64>;
}

// ---------------------------------------------------------------------------
// Default prompt
// ---------------------------------------------------------------------------

/// Prompt asking the generator for one student profile in the layout that
/// [`crate::extract::extract`] understands.
pub const STUDENT_PROFILE_PROMPT: &str = "Generate a student profile with the following information: \
1. Name \
2. Age (between 18 and 30) \
3. Marks (between 50 and 100) \
4. Department (from a list of common departments like Computer Science, Electrical, Mechanical, \
Aeronautical, Physics, Electronics and Communication, Artificial Intelligence, Cyber Security etc.) \
5. Hobbies (like reading, swimming, cooking, etc.) \
6. Sport (like football, cricket, basketball, etc.) \
Format every field as **Field:** value on its own line. \
List hobbies and sports as bullet points under **Hobbies:** and **Sport:**, with **Sport:** last.";
