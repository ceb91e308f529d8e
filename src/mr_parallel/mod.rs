mod coordinator;
mod worker_pool;

use std::{num::NonZeroUsize, sync::Arc, thread};

use crate::common::{Input, MapReduce, MapReduceApp, Output};
use async_trait::async_trait;
use coordinator::Coordinator;

pub const DEFAULT_CHUNK_LINES: usize = 1024;

pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

pub struct ParallelMapReduce {
    input: Input,
    mr_app: Arc<dyn MapReduceApp>,
    workers: usize,
    chunk_lines: usize,
}

impl ParallelMapReduce {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_chunk_lines(mut self, chunk_lines: usize) -> Self {
        self.chunk_lines = chunk_lines.max(1);
        self
    }
}

#[async_trait]
impl MapReduce for ParallelMapReduce {
    fn new(input: Input, mr_app: Arc<dyn MapReduceApp>) -> Self {
        Self {
            input,
            mr_app,
            workers: default_workers(),
            chunk_lines: DEFAULT_CHUNK_LINES,
        }
    }

    async fn run(self) -> anyhow::Result<Output> {
        let coord = Coordinator {
            workers: self.workers,
            chunk_lines: self.chunk_lines,
        };
        let input = self.input;
        let mr_app = self.mr_app;

        tokio::task::spawn_blocking(move || coord.start_pool(&input, mr_app)).await?
    }
}
