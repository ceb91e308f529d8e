pub mod common;
pub mod config;
pub mod count_table;
pub mod error;
pub mod map_reduce_apps;
pub mod map_reduce_seq;
pub mod mr_parallel;
pub mod report;
pub mod tokenizer;

use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use common::{MapReduce, MapReduceApp};
use config::Config;
use count_table::CountTable;
use map_reduce_apps::WordCount;
use map_reduce_seq::SequentialMapReduce;
use mr_parallel::ParallelMapReduce;
use report::Report;

/// Counts the configured input with the engine the worker count asks for.
pub async fn count(config: &Config) -> anyhow::Result<CountTable> {
    let app: Arc<dyn MapReduceApp> = Arc::new(WordCount::new(config.split));
    let input = config.input.clone();

    if config.workers == 1 {
        debug!(split = ?config.split, "using sequential engine");
        SequentialMapReduce::new(input, app).run().await
    } else {
        debug!(split = ?config.split, workers = config.workers, "using parallel engine");
        ParallelMapReduce::new(input, app)
            .with_workers(config.workers)
            .with_chunk_lines(config.chunk_lines)
            .run()
            .await
    }
}

/// Counts, prints the report unless quiet, then persists it when an output path is set.
/// Printed lines stay printed even when persisting fails.
pub async fn run(config: &Config) -> anyhow::Result<Report> {
    let table = count(config).await?;
    let report = Report::new(table, config.order);

    if !config.quiet {
        report.print().context("failed to print report")?;
    }

    if let Some(output) = &config.output {
        report.persist(output, config.overwrite)?;
    }

    Ok(report)
}
