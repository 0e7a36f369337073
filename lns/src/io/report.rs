use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

pub const REPORT_HEADER: &str = "Iteration Fitness GlobalBest Time";

/// State of a search after one of its iterations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRecord {
    pub iteration: usize,
    /// Fitness of the candidate evaluated in this iteration
    pub fitness: f32,
    /// Best fitness seen so far, including this iteration
    pub best_fitness: f32,
    /// Time since the start of the run
    pub elapsed: Duration,
}

/// Destination of the progress records of a search.
pub trait ProgressSink {
    fn record(&mut self, record: &ProgressRecord) -> Result<()>;

    /// Called once, after the last record of a run.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Whitespace-delimited text report: a header line followed by an
/// `iteration fitness best_fitness elapsed_seconds` line per record.
pub struct TextReport<W: Write> {
    writer: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{REPORT_HEADER}")?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextReport<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("could not create report file: {}", path.display()))?;
        TextReport::new(BufWriter::new(file))
    }
}

impl<W: Write> ProgressSink for TextReport<W> {
    fn record(&mut self, record: &ProgressRecord) -> Result<()> {
        writeln!(
            self.writer,
            "{} {} {} {}",
            record.iteration,
            record.fitness,
            record.best_fitness,
            record.elapsed.as_secs_f32()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps all records in memory
impl ProgressSink for Vec<ProgressRecord> {
    fn record(&mut self, record: &ProgressRecord) -> Result<()> {
        self.push(*record);
        Ok(())
    }
}

/// Discards all records
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReport;

impl ProgressSink for NoReport {
    fn record(&mut self, _record: &ProgressRecord) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_writes_header_and_records() {
        let mut report = TextReport::new(Vec::new()).unwrap();
        report
            .record(&ProgressRecord {
                iteration: 0,
                fitness: 0.5,
                best_fitness: 0.75,
                elapsed: Duration::from_millis(250),
            })
            .unwrap();
        report.finish().unwrap();

        let output = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(output, "Iteration Fitness GlobalBest Time\n0 0.5 0.75 0.25\n");
    }
}
