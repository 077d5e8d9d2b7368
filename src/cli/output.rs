//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::{Candidate, CheckOutcome};
use crate::table::TableStats;

/// Result structure for dictionary loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSummary {
    pub dictionary: String,
    pub words: usize,
    pub duration_ms: u64,
    pub seconds: f64,
}

/// Receives results and displays them.
pub trait Reporter {
    /// Report that a dictionary finished loading.
    fn report_load(&mut self, summary: &LoadSummary) -> Result<()>;

    /// Report the outcome of checking one word.
    fn report_check(&mut self, outcome: &CheckOutcome) -> Result<()>;

    /// Report dictionary table statistics.
    fn report_stats(&mut self, stats: &TableStats) -> Result<()>;
}

/// Plain-text reporter.
pub struct HumanReporter<W> {
    writer: W,
    show_distances: bool,
}

impl<W: Write> HumanReporter<W> {
    /// Create a reporter writing to `writer`.
    pub fn new(writer: W) -> Self {
        HumanReporter {
            writer,
            show_distances: false,
        }
    }

    /// List each suggestion with its edit distance.
    pub fn with_distances(mut self, show_distances: bool) -> Self {
        self.show_distances = show_distances;
        self
    }

    /// Consume the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render suggestions as "a, b, or c".
fn did_you_mean(suggestions: &[Candidate]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => only.word.clone(),
        [rest @ .., last] => {
            let mut text: String = rest.iter().map(|c| format!("{}, ", c.word)).collect();
            text.push_str("or ");
            text.push_str(&last.word);
            text
        }
    }
}

impl<W: Write> Reporter for HumanReporter<W> {
    fn report_load(&mut self, summary: &LoadSummary) -> Result<()> {
        writeln!(self.writer, "size: {}", summary.words)?;
        writeln!(
            self.writer,
            "Dictionary loaded in {:.6} seconds",
            summary.seconds
        )?;
        Ok(())
    }

    fn report_check(&mut self, outcome: &CheckOutcome) -> Result<()> {
        match outcome {
            CheckOutcome::Correct { word } => {
                writeln!(
                    self.writer,
                    "The inputted word {word} is spelled correctly."
                )?;
            }
            CheckOutcome::Misspelled { word, suggestions } => {
                write!(
                    self.writer,
                    "The inputted word {word} is spelled incorrectly. "
                )?;
                if suggestions.is_empty() {
                    writeln!(self.writer, "No suggestions are available.")?;
                } else {
                    writeln!(self.writer, "Did you mean {}?", did_you_mean(suggestions))?;
                }

                if self.show_distances {
                    for (i, candidate) in suggestions.iter().enumerate() {
                        writeln!(
                            self.writer,
                            "  {}. {} (distance {})",
                            i + 1,
                            candidate.word,
                            candidate.distance
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn report_stats(&mut self, stats: &TableStats) -> Result<()> {
        writeln!(self.writer, "Dictionary Table Statistics:")?;
        writeln!(self.writer, "════════════════════════════")?;
        writeln!(self.writer, "Words: {}", stats.size)?;
        writeln!(self.writer, "Buckets: {}", stats.capacity)?;
        writeln!(self.writer, "Empty buckets: {}", stats.empty_buckets)?;
        writeln!(self.writer, "Load factor: {:.3}", stats.load_factor)?;
        writeln!(self.writer, "Longest chain: {}", stats.longest_chain)?;
        writeln!(self.writer, "Hash function: {}", stats.hash_function)?;
        Ok(())
    }
}

/// JSON reporter writing one document per report.
pub struct JsonReporter<W> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonReporter<W> {
    /// Create a reporter writing to `writer`.
    pub fn new(writer: W, pretty: bool) -> Self {
        JsonReporter { writer, pretty }
    }

    /// Consume the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn output<T: Serialize>(&mut self, result: &T) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };

        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report_load(&mut self, summary: &LoadSummary) -> Result<()> {
        self.output(summary)
    }

    fn report_check(&mut self, outcome: &CheckOutcome) -> Result<()> {
        self.output(outcome)
    }

    fn report_stats(&mut self, stats: &TableStats) -> Result<()> {
        self.output(stats)
    }
}
