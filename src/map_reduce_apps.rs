use crate::common::MapReduceApp;
use crate::tokenizer::{SplitMode, Tokenizer};

pub struct WordCount {
    tokenizer: Tokenizer,
}

impl WordCount {
    pub fn new(mode: SplitMode) -> Self {
        Self {
            tokenizer: Tokenizer::new(mode),
        }
    }
}

impl Default for WordCount {
    fn default() -> Self {
        Self::new(SplitMode::default())
    }
}

impl MapReduceApp for WordCount {
    fn map<'a>(&self, line: &'a str) -> Vec<&'a str> {
        self.tokenizer.tokenize(line)
    }
}
