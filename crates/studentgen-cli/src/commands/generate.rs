//! The `studentgen generate` command.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use studentgen_core::engine::{BatchSummary, GenerationEngine, ProgressReporter};
use studentgen_core::model::StudentRecord;
use studentgen_core::traits::{RecordStore, TextGenerator};
use studentgen_providers::create_provider;

use super::Context;

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_record_start(&self, index: usize, total: usize) {
        eprintln!("  Generating profile {index}/{total}...");
    }

    fn on_record_inserted(&self, record: &StudentRecord) {
        eprintln!(
            "  Stored #{}: {} ({}, {})",
            record.id, record.name, record.department, record.age
        );
    }

    fn on_record_skipped(&self, index: usize, reason: &str) {
        eprintln!("  Could not generate profile {index}, skipping: {reason}");
    }

    fn on_batch_complete(&self, summary: &BatchSummary, elapsed: Duration) {
        eprintln!(
            "\nComplete: {}/{} stored, {} skipped ({:.1}s)",
            summary.inserted,
            summary.requested,
            summary.skipped,
            elapsed.as_secs_f64()
        );
    }
}

pub async fn execute(ctx: &Context, count: usize) -> Result<()> {
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let config = ctx.load_config()?;
    let generator: Arc<dyn TextGenerator> = Arc::from(create_provider(&config)?);
    let storage = ctx.open_store(&config).await?;
    let db_path = storage.path().to_path_buf();
    let store: Arc<dyn RecordStore> = Arc::new(storage);

    eprintln!(
        "studentgen v{}: generating {count} profile(s) with {}/{}",
        env!("CARGO_PKG_VERSION"),
        generator.name(),
        config.model
    );

    let engine = GenerationEngine::new(generator, store, config.generation_config());
    let summary = engine.run(count, &ConsoleReporter).await?;

    if summary.inserted == 0 {
        println!("No student profiles could be generated.");
    } else {
        println!(
            "Inserted {} generated student records into {}.",
            summary.inserted,
            db_path.display()
        );
    }

    Ok(())
}
