//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordmap_core::WordCount;

/// JSON formatter - outputs ranked words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WordData {
    /// Position in the ranking, starting at 1
    pub rank: usize,
    /// The counted word
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            words: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn begin(&mut self, _title: &str) -> Result<()> {
        self.words.clear();
        Ok(())
    }

    fn format_word(&mut self, rank: usize, entry: &WordCount) -> Result<()> {
        self.words.push(WordData {
            rank,
            word: entry.word.clone(),
            count: entry.count,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.words)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
