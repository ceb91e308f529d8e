use async_trait::async_trait;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{count_table::CountTable, error::WordCountError};

/// path of the text file to count
pub type Input = PathBuf;
/// {token: count}
pub type Output = CountTable;

pub enum Task {
    // partition index, lines
    Map(usize, Vec<String>),
}

/// Turns one input line into the keys it contributes. Every emitted key counts once;
/// the reduce side is always key-wise summation.
pub trait MapReduceApp: Send + Sync {
    fn map<'a>(&self, line: &'a str) -> Vec<&'a str>;
}

#[async_trait]
pub trait MapReduce {
    fn new(input: Input, mr_app: Arc<dyn MapReduceApp>) -> Self;
    async fn run(self) -> anyhow::Result<Output>;
}

/// Streams the lines of `path`. Open and read failures, including invalid UTF-8, are
/// reported as input errors carrying the path.
pub fn read_lines(
    path: &Path,
) -> Result<impl Iterator<Item = Result<String, WordCountError>>, WordCountError> {
    let file = File::open(path).map_err(|err| WordCountError::input(path, err))?;
    let owned = path.to_path_buf();
    Ok(BufReader::new(file)
        .lines()
        .map(move |line| line.map_err(|err| WordCountError::input(owned.clone(), err))))
}

/// Map side for a single line: every key the app emits is observed once.
pub fn map_line(app: &dyn MapReduceApp, line: &str, table: &mut CountTable) {
    for key in app.map(line) {
        table.observe(key);
    }
}
