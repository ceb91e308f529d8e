use clap::ValueEnum;
use regex::Regex;

/// How a line is cut into tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SplitMode {
    /// Split on runs of whitespace and drop empty tokens.
    #[default]
    Whitespace,
    /// Split on every single space and keep the empty tokens in between.
    Legacy,
}

#[derive(Clone, Debug)]
pub struct Tokenizer {
    mode: SplitMode,
    delimiter: Regex,
}

impl Tokenizer {
    pub fn new(mode: SplitMode) -> Self {
        let pattern = match mode {
            SplitMode::Whitespace => r"\s+",
            SplitMode::Legacy => " ",
        };
        let delimiter = Regex::new(pattern).expect("invalid regex");
        Self { mode, delimiter }
    }

    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let pieces = self.delimiter.split(line);
        match self.mode {
            SplitMode::Whitespace => pieces.filter(|token| !token.is_empty()).collect(),
            SplitMode::Legacy => pieces.collect(),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(SplitMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_collapses_runs() {
        let tokenizer = Tokenizer::new(SplitMode::Whitespace);
        assert_eq!(tokenizer.tokenize("  the\tcat   sat "), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn whitespace_blank_lines_have_no_tokens() {
        let tokenizer = Tokenizer::new(SplitMode::Whitespace);
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" \t  ").is_empty());
    }

    #[test]
    fn legacy_keeps_empty_tokens() {
        let tokenizer = Tokenizer::new(SplitMode::Legacy);
        assert_eq!(tokenizer.tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq!(tokenizer.tokenize(" a "), vec!["", "a", ""]);
    }

    #[test]
    fn legacy_only_splits_on_spaces() {
        let tokenizer = Tokenizer::new(SplitMode::Legacy);
        assert_eq!(tokenizer.tokenize("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn legacy_empty_line_is_one_empty_token() {
        let tokenizer = Tokenizer::new(SplitMode::Legacy);
        assert_eq!(tokenizer.tokenize(""), vec![""]);
    }

    #[test]
    fn tokens_keep_case() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.tokenize("The the THE"), vec!["The", "the", "THE"]);
    }
}
