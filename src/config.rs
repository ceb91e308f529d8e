use std::path::PathBuf;

use clap::Parser;

use crate::error::WordCountError;
use crate::mr_parallel::{default_workers, DEFAULT_CHUNK_LINES};
use crate::report::Order;
use crate::tokenizer::SplitMode;

/// Count how often each token occurs in a text file.
#[derive(Parser, Debug)]
#[command(name = "wordcount", version)]
pub struct Args {
    /// Text file to count
    pub input: PathBuf,

    /// File to persist the `token: count` lines to
    pub output: Option<PathBuf>,

    /// Worker threads; 1 counts sequentially [default: available parallelism]
    #[arg(short, long, env = "WORDCOUNT_WORKERS")]
    pub workers: Option<usize>,

    /// Lines handed to a worker at a time
    #[arg(long, env = "WORDCOUNT_CHUNK_LINES", default_value_t = DEFAULT_CHUNK_LINES)]
    pub chunk_lines: usize,

    /// How lines are split into tokens
    #[arg(long, value_enum, env = "WORDCOUNT_SPLIT", default_value_t = SplitMode::Whitespace)]
    pub split: SplitMode,

    /// Order of the reported lines
    #[arg(long, value_enum, env = "WORDCOUNT_ORDER", default_value_t = Order::Count)]
    pub order: Order,

    /// Replace OUTPUT if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Do not print the report to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub workers: usize,
    pub chunk_lines: usize,
    pub split: SplitMode,
    pub order: Order,
    pub overwrite: bool,
    pub quiet: bool,
}

impl TryFrom<Args> for Config {
    type Error = WordCountError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let workers = args.workers.unwrap_or_else(default_workers);
        if workers == 0 {
            return Err(WordCountError::Config("--workers must be at least 1".to_string()));
        }
        if args.chunk_lines == 0 {
            return Err(WordCountError::Config(
                "--chunk-lines must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            input: args.input,
            output: args.output,
            workers,
            chunk_lines: args.chunk_lines,
            split: args.split,
            order: args.order,
            overwrite: args.overwrite,
            quiet: args.quiet,
        })
    }
}
