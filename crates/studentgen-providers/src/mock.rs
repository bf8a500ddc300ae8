//! Mock provider for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use studentgen_core::traits::{GenerateRequest, GenerateResponse, TextGenerator};

use crate::error::ProviderError;

/// Profile returned when no responses are configured.
pub const SAMPLE_PROFILE: &str = "\
**Name:** Ananya Rao
**Age:** 20
**Marks:** 84
**Department:** Computer Science
**Hobbies:**
* Reading
* Photography
**Sport:**
* Badminton";

/// A mock text generator that cycles through canned responses.
///
/// An empty string in the rotation is returned as an
/// [`ProviderError::EmptyResponse`], which lets tests exercise the skip path.
pub struct MockProvider {
    responses: Vec<String>,
    call_count: AtomicUsize,
    last_request: Mutex<Option<GenerateRequest>>,
}

impl MockProvider {
    /// Create a mock that returns `responses` in order, wrapping around.
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            call_count: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that always returns the same response.
    pub fn with_fixed_response(response: &str) -> Self {
        Self::new(vec![response.to_string()])
    }

    /// Get the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this provider.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::with_fixed_response(SAMPLE_PROFILE)
    }
}

#[async_trait]
impl TextGenerator for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let call = self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }

        let content = if self.responses.is_empty() {
            SAMPLE_PROFILE.to_string()
        } else {
            self.responses[call % self.responses.len()].clone()
        };

        if content.trim().is_empty() {
            return Err(ProviderError::EmptyResponse(format!("mock call {}", call + 1)).into());
        }

        Ok(GenerateResponse {
            content,
            model: request.model.clone(),
            latency_ms: 1,
        })
    }
}
