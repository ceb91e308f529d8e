use std::{mem, path::Path, sync::Arc};

use tracing::{debug, info};

use crate::common::{read_lines, MapReduceApp, Task};
use crate::count_table::CountTable;
use crate::error::WordCountError;

use super::worker_pool::WorkerPool;

pub struct Coordinator {
    pub workers: usize,
    pub chunk_lines: usize,
}

struct Dispatched {
    partitions: usize,
    lines: usize,
}

impl Coordinator {
    pub fn start_pool(
        &self,
        input: &Path,
        mr_app: Arc<dyn MapReduceApp>,
    ) -> anyhow::Result<CountTable> {
        let pool = WorkerPool::new(self.workers, mr_app);

        let dispatched = self.dispatch(input, &pool);
        // always join the workers, even when reading stopped early
        let partials = pool.finish()?;
        let dispatched = dispatched?;

        let table = combine_partials(partials);

        info!(
            input = %input.display(),
            workers = self.workers,
            partitions = dispatched.partitions,
            lines = dispatched.lines,
            tokens = table.total(),
            distinct = table.len(),
            "parallel count finished"
        );

        Ok(table)
    }

    fn dispatch(&self, input: &Path, pool: &WorkerPool) -> Result<Dispatched, WordCountError> {
        let mut partitions = 0;
        let mut lines = 0;
        let mut chunk = Vec::with_capacity(self.chunk_lines);

        for line in read_lines(input)? {
            chunk.push(line?);
            lines += 1;

            if chunk.len() == self.chunk_lines {
                let full = mem::replace(&mut chunk, Vec::with_capacity(self.chunk_lines));
                debug!(partition = partitions, "dispatch");
                pool.run_task(Task::Map(partitions, full))?;
                partitions += 1;
            }
        }

        if !chunk.is_empty() {
            debug!(partition = partitions, lines = chunk.len(), "dispatch tail");
            pool.run_task(Task::Map(partitions, chunk))?;
            partitions += 1;
        }

        Ok(Dispatched { partitions, lines })
    }
}

fn combine_partials(partials: Vec<CountTable>) -> CountTable {
    partials
        .into_iter()
        .fold(CountTable::new(), |mut acc, partial| {
            acc.merge(partial);
            acc
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::map_reduce_apps::WordCount;

    fn input_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn every_chunking_gives_the_same_counts() {
        let file = input_file("a b c\nb c\nc\n\nd a\na\n");
        let app: Arc<dyn MapReduceApp> = Arc::new(WordCount::default());

        let reference = Coordinator {
            workers: 1,
            chunk_lines: 1024,
        }
        .start_pool(file.path(), Arc::clone(&app))
        .unwrap();
        assert_eq!(reference.get("a"), Some(3));
        assert_eq!(reference.get("c"), Some(3));
        assert_eq!(reference.total(), 9);

        for workers in 1..=4 {
            for chunk_lines in 1..=7 {
                let table = Coordinator {
                    workers,
                    chunk_lines,
                }
                .start_pool(file.path(), Arc::clone(&app))
                .unwrap();
                assert_eq!(table, reference, "workers={workers} chunk_lines={chunk_lines}");
            }
        }
    }

    #[test]
    fn missing_input_still_joins_workers() {
        let dir = tempfile::tempdir().unwrap();
        let err = Coordinator {
            workers: 2,
            chunk_lines: 4,
        }
        .start_pool(&dir.path().join("missing"), Arc::new(WordCount::default()))
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WordCountError>(),
            Some(WordCountError::InputRead { .. })
        ));
    }

    #[test]
    fn combine_of_nothing_is_empty() {
        assert!(combine_partials(Vec::new()).is_empty());
    }
}
