use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::common::{map_line, read_lines, Input, MapReduce, MapReduceApp, Output};
use crate::count_table::CountTable;

pub struct SequentialMapReduce {
    input: Input,
    mr_app: Arc<dyn MapReduceApp>,
}

impl SequentialMapReduce {
    pub fn run_sync(self) -> anyhow::Result<Output> {
        let mut table = CountTable::new();
        let mut lines = 0usize;

        for line in read_lines(&self.input)? {
            map_line(self.mr_app.as_ref(), &line?, &mut table);
            lines += 1;
        }

        info!(
            input = %self.input.display(),
            lines,
            tokens = table.total(),
            distinct = table.len(),
            "sequential count finished"
        );

        Ok(table)
    }
}

#[async_trait]
impl MapReduce for SequentialMapReduce {
    fn new(input: Input, mr_app: Arc<dyn MapReduceApp>) -> Self {
        Self { input, mr_app }
    }

    async fn run(self) -> anyhow::Result<Output> {
        tokio::task::spawn_blocking(move || self.run_sync()).await?
    }
}
