//! Batch generation engine.
//!
//! Asks a text generator for student profiles one at a time, extracts each
//! response, and appends the result to a record store. A failed generation
//! skips that record; the batch carries on.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::extract::extract;
use crate::model::StudentRecord;
use crate::traits::{GenerateRequest, RecordStore, TextGenerator, STUDENT_PROFILE_PROMPT};

/// Configuration for the generation engine.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Model identifier passed to the generator.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Max tokens per profile.
    pub max_tokens: u32,
    /// Prompt sent for every profile.
    pub prompt: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            temperature: 1.0,
            max_tokens: 1024,
            prompt: STUDENT_PROFILE_PROMPT.to_string(),
        }
    }
}

/// Progress reporting trait.
pub trait ProgressReporter: Send + Sync {
    fn on_record_start(&self, index: usize, total: usize);
    fn on_record_inserted(&self, record: &StudentRecord);
    fn on_record_skipped(&self, index: usize, reason: &str);
    fn on_batch_complete(&self, summary: &BatchSummary, elapsed: Duration);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_record_start(&self, _: usize, _: usize) {}
    fn on_record_inserted(&self, _: &StudentRecord) {}
    fn on_record_skipped(&self, _: usize, _: &str) {}
    fn on_batch_complete(&self, _: &BatchSummary, _: Duration) {}
}

/// Outcome of one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of profiles requested.
    pub requested: usize,
    /// Number of records written.
    pub inserted: usize,
    /// Number of generations that produced nothing usable.
    pub skipped: usize,
    /// Ids assigned to the written records, in order.
    pub inserted_ids: Vec<i64>,
}

/// The batch generation engine.
pub struct GenerationEngine {
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn RecordStore>,
    config: GenerationConfig,
}

impl GenerationEngine {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn RecordStore>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            generator,
            store,
            config,
        }
    }

    /// Generate and store `count` profiles.
    ///
    /// Generation failures are logged and skipped. Storage failures abort the
    /// batch since nothing after them could be persisted either.
    pub async fn run(&self, count: usize, progress: &dyn ProgressReporter) -> Result<BatchSummary> {
        let start = Instant::now();
        let mut summary = BatchSummary {
            requested: count,
            ..Default::default()
        };

        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: self.config.prompt.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        for index in 1..=count {
            progress.on_record_start(index, count);

            let response = match self.generator.generate(&request).await {
                Ok(response) => response,
                Err(e) => {
                    log_generation_error(self.generator.name(), index, &e);
                    progress.on_record_skipped(index, &format!("{e:#}"));
                    summary.skipped += 1;
                    continue;
                }
            };

            if response.content.trim().is_empty() {
                tracing::warn!(index, "generator returned blank profile, skipping");
                progress.on_record_skipped(index, "blank response");
                summary.skipped += 1;
                continue;
            }

            let student = extract(&response.content);
            tracing::debug!(
                index,
                name = %student.name,
                latency_ms = response.latency_ms,
                "extracted profile"
            );

            let id = self
                .store
                .insert(&student)
                .await
                .with_context(|| format!("failed to store profile {index} of {count}"))?;

            let record = StudentRecord::from_new(id, student);
            progress.on_record_inserted(&record);
            summary.inserted += 1;
            summary.inserted_ids.push(id);
        }

        let elapsed = start.elapsed();
        tracing::info!(
            requested = summary.requested,
            inserted = summary.inserted,
            skipped = summary.skipped,
            elapsed_ms = elapsed.as_millis() as u64,
            "batch complete"
        );
        progress.on_batch_complete(&summary, elapsed);

        Ok(summary)
    }
}

fn log_generation_error(provider: &str, index: usize, error: &anyhow::Error) {
    match error.downcast_ref::<ProviderError>() {
        Some(e) if e.is_permanent() => {
            tracing::error!(provider, index, "generation failed: {e}");
        }
        _ => {
            tracing::warn!(provider, index, "could not generate a student profile: {error:#}");
        }
    }
}
