use std::{
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;
use tracing::info;

use crate::count_table::CountTable;
use crate::error::WordCountError;

/// Order of the rendered lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Highest count first, ties by token.
    #[default]
    Count,
    /// By token only.
    Key,
}

/// A finished count, sorted and ready to render as `token: count` lines.
#[derive(Debug)]
pub struct Report {
    entries: Vec<(String, u64)>,
}

impl Report {
    pub fn new(table: CountTable, order: Order) -> Self {
        let mut entries: Vec<_> = table.into_iter().collect();
        match order {
            Order::Count => entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))),
            Order::Key => entries.sort_by(|a, b| a.0.cmp(&b.0)),
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(|(token, count)| format_line(token, *count))
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for (token, count) in &self.entries {
            writeln!(out, "{}", format_line(token, *count))?;
        }
        out.flush()
    }

    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_to(BufWriter::new(stdout.lock()))
    }

    /// Writes the report to a single file. An existing file is only replaced when
    /// `overwrite` is set.
    pub fn persist(&self, path: &Path, overwrite: bool) -> Result<(), WordCountError> {
        let file = open_output(path, overwrite).map_err(|err| WordCountError::output(path, err))?;
        self.write_to(BufWriter::new(file))
            .map_err(|err| WordCountError::output(path, err))?;
        info!(output = %path.display(), lines = self.len(), "report persisted");
        Ok(())
    }
}

pub fn format_line(token: &str, count: u64) -> String {
    format!("{}: {}", token, count)
}

fn open_output(path: &Path, overwrite: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(path)
}
