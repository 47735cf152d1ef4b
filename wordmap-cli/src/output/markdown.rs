//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordmap_core::WordCount;

/// Markdown formatter - outputs ranked words as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn begin(&mut self, title: &str) -> Result<()> {
        self.word_count = 0;
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Rank | Word | Count |")?;
        writeln!(self.writer, "|-----:|------|------:|")?;
        Ok(())
    }

    fn format_word(&mut self, rank: usize, entry: &WordCount) -> Result<()> {
        self.word_count += 1;
        writeln!(self.writer, "| {} | {} | {} |", rank, entry.word, entry.count)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
